//! Traits shared between collection types.

mod sequence;

pub use sequence::*;
