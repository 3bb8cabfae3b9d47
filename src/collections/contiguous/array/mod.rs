//! A module containing [`Array`] and associtated types.
//!
//! Owned iteration uses [`IntoIter`](std::vec::IntoIter) from [`std::vec`] and borrowed iteration
//! uses [`Iter`](std::slice::Iter) from [`std::slice`].
//!
//! [`Array`] is also re-exported under the parent module.

mod array;
mod iter;

pub use array::*;
