use std::fmt::{self, Debug, Display, Formatter};
use std::slice::Iter;
use std::vec::IntoIter;

use crate::collections::contiguous::{Array, List};
use crate::collections::traits::Sequence;
use crate::util::fmt::debug_with;

/// A first-in first-out sequence. Values join at the tail and leave from the head, which is index
/// 0 of the underlying [`List`].
///
/// | Method | Complexity |
/// |-|-|
/// | `peek` | `O(1)` |
/// | `size` | `O(1)` |
/// | `enqueue` | `O(1)`* |
/// | `dequeue` | `O(n)` |
///
/// \* Amortized, the backing storage may need to grow.
///
/// # Examples
/// ```
/// # use standard_collections::collections::Queue;
/// let mut queue = Queue::from([1, 2]);
/// queue.enqueue(3);
///
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.peek(), Some(&2));
/// assert_eq!(queue.size(), 2);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    pub(crate) inner: List<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue.
    pub const fn new() -> Queue<T> {
        Queue { inner: List::new() }
    }

    /// Adds `value` to the tail of the Queue.
    pub fn enqueue(&mut self, value: T) {
        self.inner.add(value)
    }

    /// Removes and returns the value at the head of the Queue, or [`None`] if it is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.inner.remove(0)
    }

    /// Returns a reference to the value at the head of the Queue without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.inner.first()
    }

    pub fn size(&self) -> usize {
        self.inner.size()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over the values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }

    /// Consumes the Queue, returning its values from head to tail as a [`List`].
    pub fn into_list(self) -> List<T> {
        self.inner
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<List<T>> for Queue<T> {
    fn from(inner: List<T>) -> Self {
        Queue { inner }
    }
}

impl<T> From<Array<T>> for Queue<T> {
    fn from(array: Array<T>) -> Self {
        Queue::from(array.into_list())
    }
}

impl<T, const N: usize> From<[T; N]> for Queue<T> {
    fn from(values: [T; N]) -> Self {
        Queue::from(List::from(values))
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue::from(List::from_iter(iter))
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.add_all(iter)
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &debug_with(|f| f.debug_list().entries(self.iter()).finish()))
            .field("size", &self.size())
            .finish()
    }
}

impl<T: Display> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.join_with(", "))
    }
}
