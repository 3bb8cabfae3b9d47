//! Contiguous collection types. Namely [`List`], which grows and shrinks at runtime, and its
//! immutable counterpart [`Array`].
#![warn(missing_docs)]

pub mod array;
pub mod list;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use list::List;
