//! A module containing [`List`] and associtated types.
//!
//! As with [`Array`](super::Array), owned iteration uses [`IntoIter`](std::vec::IntoIter) and
//! borrowed iteration uses the iterators from [`std::slice`].
//!
//! [`List`] is also re-exported under the parent module.

mod iter;
mod list;

pub use list::*;
