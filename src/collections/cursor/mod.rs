//! A module containing [`Cursor`], an explicit `has_next` / `next` reader over a sequence, and the
//! [`CursorExhausted`] error it reports when read past the end.

mod cursor;
mod error;

pub use cursor::*;
pub use error::*;
