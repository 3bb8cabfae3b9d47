//! Generic collection wrappers over native storage.
//!
//! # Method
//! [`List`] and [`Array`] implement [`Deref<Target = [T]>`](std::ops::Deref) (`List` also
//! implements `DerefMut`), which provides indexed access, `contains`, `is_empty` and borrowed
//! iteration without repeating them here. The remaining read surface shared by both lives in the
//! [`Sequence`] trait. [`Dictionary`] dereferences to [`Map`] in the same way, exposing only the
//! map's read-only methods.

pub mod contiguous;
pub mod cursor;
pub mod hash;
pub mod linear;
pub mod set;
pub mod traits;

#[doc(inline)]
pub use contiguous::{Array, List};
#[doc(inline)]
pub use cursor::{Cursor, CursorExhausted};
#[doc(inline)]
pub use hash::{Dictionary, Map};
#[doc(inline)]
pub use linear::{Queue, Stack};
#[doc(inline)]
pub use set::ListSet;
#[doc(inline)]
pub use traits::Sequence;
