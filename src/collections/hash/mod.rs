//! Hashed, insertion-ordered mapping types: the mutable [`Map`] and its read-only counterpart
//! [`Dictionary`].

pub mod dictionary;
pub mod map;

#[doc(inline)]
pub use dictionary::Dictionary;
#[doc(inline)]
pub use map::Map;
