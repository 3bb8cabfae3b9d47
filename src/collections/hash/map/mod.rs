//! A module containing [`Map`] and associtated types.
//!
//! The iterators here borrow or consume a Map's entries in insertion order. Errors are produced by
//! the constructors that check their input's shape and, with the `json` feature, by JSON object
//! export.
//!
//! [`Map`] is also re-exported under the parent module.

mod error;
mod iter;
#[cfg(feature = "json")]
mod json;
mod map;
mod tests;

pub use error::*;
pub use iter::*;
pub use map::*;
