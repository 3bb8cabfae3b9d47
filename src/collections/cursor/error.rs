use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Returned by [`Cursor::next`](super::Cursor::next) when there are no elements left to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorExhausted {
    pub index: usize,
    pub len: usize,
}

impl Display for CursorExhausted {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cursor at index {} is exhausted for a sequence with {} elements! Check has_next() first.",
            self.index, self.len
        )
    }
}

impl Error for CursorExhausted {}
