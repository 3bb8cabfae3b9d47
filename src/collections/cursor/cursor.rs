use std::fmt::{self, Debug, Formatter};

use super::CursorExhausted;

/// A single-pass reader over a borrowed sequence, with explicit [`has_next`](Cursor::has_next) and
/// [`next`](Cursor::next) calls.
///
/// A Cursor can't be restarted. Once every element has been read, [`next`](Cursor::next) keeps
/// returning [`CursorExhausted`] and the position stops advancing.
///
/// # Examples
/// ```
/// # use standard_collections::collections::{Array, Sequence};
/// let arr = Array::from([10, 20]);
/// let mut cursor = arr.cursor();
///
/// assert!(cursor.has_next());
/// assert_eq!(cursor.next(), Ok(&10));
/// assert!(cursor.has_next());
/// assert_eq!(cursor.next(), Ok(&20));
/// assert!(!cursor.has_next());
/// assert!(cursor.next().is_err());
/// ```
#[derive(Clone)]
pub struct Cursor<'a, T> {
    pub(crate) items: &'a [T],
    pub(crate) index: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// Creates a Cursor positioned before the first element of `items`.
    pub const fn new(items: &'a [T]) -> Cursor<'a, T> {
        Cursor { items, index: 0 }
    }

    /// Returns true if a call to [`next`](Cursor::next) would produce an element.
    pub const fn has_next(&self) -> bool {
        self.index < self.items.len()
    }

    /// Returns the element at the current position and advances past it.
    ///
    /// # Errors
    /// Returns [`CursorExhausted`] if every element has already been read. The position isn't
    /// advanced in that case.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&'a T, CursorExhausted> {
        match self.items.get(self.index) {
            Some(item) => {
                self.index += 1;
                Ok(item)
            },
            None => {
                tracing::debug!(index = self.index, "read past the end of a cursor");
                Err(CursorExhausted {
                    index: self.index,
                    len: self.items.len(),
                })
            },
        }
    }

    /// Returns the index of the element the next call to [`next`](Cursor::next) would return.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of elements left to read.
    pub const fn remaining(&self) -> usize {
        self.items.len() - self.index
    }
}

impl<T: Debug> Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("remaining", &&self.items[self.index..])
            .field("index", &self.index)
            .finish()
    }
}
