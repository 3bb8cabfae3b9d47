//! A module containing [`Dictionary`], the read-only counterpart of [`Map`](super::Map).

mod dictionary;
mod tests;

pub use dictionary::*;
