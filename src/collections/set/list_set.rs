use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{BitAnd, BitOr, Sub};
use std::slice::Iter;
use std::vec::IntoIter;

use crate::collections::contiguous::{Array, List};
use crate::collections::traits::Sequence;
use crate::util::fmt::debug_with;

/// A collection of unique values, kept in the order they were first added. Backed by a [`List`],
/// so membership checks are linear scans and values only need [`PartialEq`].
///
/// Constructing a ListSet from values that contain duplicates keeps the first occurrence of each.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the ListSet.
/// - `m`: The number of values in the other ListSet.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `contains` | `O(n)` |
/// | `add` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `union` / `intersection` / `difference` | `O(n * m)` |
/// | `is_subset` | `O(n * m)` |
///
/// # Examples
/// ```
/// # use standard_collections::collections::ListSet;
/// let a = ListSet::from([1, 2, 3]);
/// let b = ListSet::from([3, 4]);
///
/// assert_eq!(a.union(&b), ListSet::from([1, 2, 3, 4]));
/// assert_eq!(a.intersection(&b), ListSet::from([3]));
/// assert_eq!(a.difference(&b), ListSet::from([1, 2]));
/// assert!(ListSet::from([2, 1]).is_subset(&a));
/// ```
#[derive(Clone)]
pub struct ListSet<T: PartialEq> {
    pub(crate) inner: List<T>,
}

impl<T: PartialEq> ListSet<T> {
    /// Creates a new, empty ListSet.
    pub const fn new() -> ListSet<T> {
        ListSet { inner: List::new() }
    }

    /// Returns the number of values in the ListSet.
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// Returns true if the ListSet contains no values.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns true if the ListSet contains a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.inner.contains(value)
    }

    /// Adds `value` to the end of the ListSet, unless an equal value is already present. Returns
    /// true if the value was added.
    pub fn add(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.inner.add(value);
        true
    }

    /// Removes the value equal to `value`, returning it if it was present.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        self.inner.remove_value(value)
    }

    /// Returns an iterator over all values in insertion order, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }

    /// Returns true if every value in `self` is also in `other`. (`self ⊆ other`)
    pub fn is_subset(&self, other: &ListSet<T>) -> bool {
        self.iter().all(|value| other.contains(value))
    }

    /// Returns true if every value in `other` is also in `self`. (`self ⊇ other`)
    pub fn is_superset(&self, other: &ListSet<T>) -> bool {
        other.is_subset(self)
    }

    /// Consumes the ListSet, returning its values as a [`List`].
    pub fn into_list(self) -> List<T> {
        self.inner
    }

    /// Returns the values of the ListSet as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

impl<T: PartialEq + Clone> ListSet<T> {
    /// Creates a ListSet of every value that is in either `self` or `other`: the values of `self`
    /// followed by those of `other` that `self` lacks. (`self ∪ other`)
    pub fn union(&self, other: &ListSet<T>) -> ListSet<T> {
        let mut union = self.clone();
        union.inner.add_all(other.iter().filter(|value| !self.contains(value)).cloned());
        union
    }

    /// Creates a ListSet of every value that is in both `self` and `other`, in the order of
    /// `self`. (`self ∩ other`)
    pub fn intersection(&self, other: &ListSet<T>) -> ListSet<T> {
        ListSet {
            inner: self.iter().filter(|value| other.contains(value)).cloned().collect(),
        }
    }

    /// Creates a ListSet of every value that is in `self` but not `other`, in the order of
    /// `self`. (`self \ other`)
    pub fn difference(&self, other: &ListSet<T>) -> ListSet<T> {
        ListSet {
            inner: self.iter().filter(|value| !other.contains(value)).cloned().collect(),
        }
    }

    /// Returns a [`List`] holding a copy of every value.
    pub fn to_list(&self) -> List<T> {
        self.inner.clone()
    }
}

impl<T: PartialEq> Default for ListSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for ListSet<T> {
    /// Two ListSets are equal if they hold the same values, regardless of order.
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.is_subset(other)
    }
}

impl<T: Eq> Eq for ListSet<T> {}

impl<T: PartialEq> FromIterator<T> for ListSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = ListSet::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for ListSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for ListSet<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: PartialEq> From<List<T>> for ListSet<T> {
    fn from(list: List<T>) -> Self {
        list.into_iter().collect()
    }
}

impl<T: PartialEq> From<Array<T>> for ListSet<T> {
    fn from(array: Array<T>) -> Self {
        array.into_iter().collect()
    }
}

impl<T: PartialEq> IntoIterator for ListSet<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T: PartialEq> IntoIterator for &'a ListSet<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq + Clone> BitOr for &ListSet<T> {
    type Output = ListSet<T>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T: PartialEq + Clone> BitAnd for &ListSet<T> {
    type Output = ListSet<T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T: PartialEq + Clone> Sub for &ListSet<T> {
    type Output = ListSet<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl<T: PartialEq + Debug> Debug for ListSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListSet")
            .field("contents", &debug_with(|f| f.debug_set().entries(self.iter()).finish()))
            .field("size", &self.size())
            .finish()
    }
}

impl<T: PartialEq + Display> Display for ListSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{{{}}}", self.inner.join_with(", "))
    }
}
