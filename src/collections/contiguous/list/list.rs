use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Deref, DerefMut};

use crate::collections::contiguous::Array;
use crate::collections::traits::Sequence;
use crate::util::fmt::debug_with;

/// A growable, ordered sequence that owns its elements. Wraps a [`Vec`].
///
/// Duplicates are allowed and insertion order is significant. Reads that fall outside of the List
/// (`get`, [`remove`](List::remove)) return [`None`] instead of panicking, so callers that care
/// should check [`size`](Sequence::size) first. Direct indexing (`list[i]`) still panics when out
/// of bounds, as it does for slices.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the List.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `add` | `O(1)`* |
/// | `insert` | `O(n-i)`* |
/// | `remove` | `O(n-i)` |
/// | `remove_value` | `O(n)` |
/// | `contains` | `O(n)` |
/// | `into_array` | `O(1)`** |
///
/// \* Amortized, the backing storage may need to grow.
///
/// \** Unless there is spare capacity to release.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct List<T> {
    pub(crate) inner: Vec<T>,
}

impl<T> List<T> {
    /// Creates a new, empty List. No memory is allocated until the first element is added.
    pub const fn new() -> List<T> {
        List { inner: Vec::new() }
    }

    /// Creates a new, empty List with space for at least `cap` elements.
    pub fn with_cap(cap: usize) -> List<T> {
        List {
            inner: Vec::with_capacity(cap),
        }
    }

    /// Creates a List that takes over the storage of `array`. The Array is consumed.
    pub fn from_array(array: Array<T>) -> List<T> {
        array.into_list()
    }

    /// Appends `value` to the end of the List.
    pub fn add(&mut self, value: T) {
        self.inner.push(value)
    }

    /// Appends every value produced by `values`, in order.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.inner.extend(values)
    }

    /// Inserts `value` at `index`, shifting every later element to the right. An `index` past the
    /// end of the List appends the value instead.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::List;
    /// let mut list = List::from([1, 3]);
    /// list.insert(1, 2);
    /// list.insert(10, 4);
    /// assert_eq!(&*list, &[1, 2, 3, 4]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        let index = index.min(self.inner.len());
        self.inner.insert(index, value)
    }

    /// Removes and returns the element at `index`, or [`None`] if `index` is out of bounds (in
    /// which case the List is unchanged).
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.inner.len() {
            Some(self.inner.remove(index))
        } else {
            None
        }
    }

    /// Removes and returns the first element equal to `value`, if there is one.
    pub fn remove_value(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.index_of(value)?;
        self.remove(index)
    }

    /// Removes every element from the List.
    pub fn remove_all(&mut self) {
        self.inner.clear()
    }

    /// Moves every element of `other` onto the end of this List, preserving their order.
    pub fn merge(&mut self, mut other: List<T>) {
        self.inner.append(&mut other.inner)
    }

    /// Consumes the List, returning an [`Array`] that owns the same storage.
    pub fn into_array(self) -> Array<T> {
        Array::from(self.inner.into_boxed_slice())
    }

    /// Returns an [`Array`] holding a copy of every element, a snapshot that later changes to the
    /// List won't affect.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::{List, Sequence};
    /// let mut list = List::from(["a", "b"]);
    /// let snapshot = list.to_array();
    /// list.add("c");
    ///
    /// assert_eq!(snapshot.size(), 2);
    /// assert_eq!(list.size(), 3);
    /// ```
    pub fn to_array(&self) -> Array<T>
    where
        T: Clone,
    {
        Array::from(self.as_slice())
    }

    /// Returns the contents of the List as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// Returns the contents of the List as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.inner.as_mut_slice()
    }

    /// Consumes the List, returning the underlying [`Vec`].
    pub fn into_vec(self) -> Vec<T> {
        self.inner
    }
}

impl<T> Sequence<T> for List<T> {}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for List<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for List<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for List<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for List<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for List<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for List<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(inner: Vec<T>) -> Self {
        List { inner }
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(values: [T; N]) -> Self {
        List {
            inner: Vec::from(values),
        }
    }
}

impl<T> From<Array<T>> for List<T> {
    fn from(array: Array<T>) -> Self {
        array.into_list()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("contents", &debug_with(|f| f.debug_list().entries(self.iter()).finish()))
            .field("size", &self.size())
            .field("cap", &self.inner.capacity())
            .finish()
    }
}

impl<T: Display> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join_with(", "))
    }
}
