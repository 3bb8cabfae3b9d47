use std::fmt::{self, Debug, Display, Formatter};
use std::slice::Iter;
use std::vec::IntoIter;

use crate::collections::contiguous::{Array, List};
use crate::collections::traits::Sequence;
use crate::util::fmt::debug_with;

/// A last-in first-out sequence. The top of the Stack is index 0 of the underlying [`List`], so
/// a Stack created from `[1, 2, 3]` pops `1` first.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Stack.
///
/// | Method | Complexity |
/// |-|-|
/// | `peek` | `O(1)` |
/// | `size` | `O(1)` |
/// | `push` | `O(n)` |
/// | `pop` | `O(n)` |
///
/// # Examples
/// ```
/// # use standard_collections::collections::Stack;
/// let mut stack = Stack::new();
/// stack.push("a");
/// stack.push("b");
///
/// assert_eq!(stack.peek(), Some(&"b"));
/// assert_eq!(stack.pop(), Some("b"));
/// assert_eq!(stack.pop(), Some("a"));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    pub(crate) inner: List<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack.
    pub const fn new() -> Stack<T> {
        Stack { inner: List::new() }
    }

    /// Places `value` on top of the Stack.
    pub fn push(&mut self, value: T) {
        self.inner.insert(0, value)
    }

    /// Removes and returns the value on top of the Stack, or [`None`] if it is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.inner.remove(0)
    }

    /// Returns a reference to the value on top of the Stack without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.inner.first()
    }

    pub fn size(&self) -> usize {
        self.inner.size()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over the values from the top down.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }

    /// Consumes the Stack, returning its values from the top down as a [`List`].
    pub fn into_list(self) -> List<T> {
        self.inner
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<List<T>> for Stack<T> {
    fn from(inner: List<T>) -> Self {
        Stack { inner }
    }
}

impl<T> From<Array<T>> for Stack<T> {
    fn from(array: Array<T>) -> Self {
        Stack::from(array.into_list())
    }
}

impl<T, const N: usize> From<[T; N]> for Stack<T> {
    fn from(values: [T; N]) -> Self {
        Stack::from(List::from(values))
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Creates a Stack with the first value produced by `iter` on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack::from(List::from_iter(iter))
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("contents", &debug_with(|f| f.debug_list().entries(self.iter()).finish()))
            .field("size", &self.size())
            .finish()
    }
}

impl<T: Display> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.join_with(", "))
    }
}
