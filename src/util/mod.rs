pub mod fmt;
#[cfg(test)]
pub mod hash;
pub mod panic;
