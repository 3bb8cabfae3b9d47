//! A module containing [`ListSet`], a set of unique values kept in insertion order.
//!
//! [`ListSet`] is also re-exported under the parent module.

mod list_set;
mod tests;

pub use list_set::*;
