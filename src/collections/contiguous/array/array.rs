use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Deref;

use crate::collections::contiguous::List;
use crate::collections::traits::Sequence;
use crate::util::fmt::debug_with;

/// An immutable sequence that is sized when it is created. Similar to a [`Box<[T]>`](Box<T>),
/// which it wraps.
///
/// No method on an Array changes its contents: it only dereferences to a shared `[T]`. To change
/// the values, convert it into a [`List`] with [`Array::into_list`] (moving the storage) or
/// [`Array::to_list`] (copying it).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `contains` | `O(n)` |
/// | `index_of` | `O(n)` |
/// | `into_list` | `O(1)` |
/// | `to_list` | `O(n)` |
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Array<T> {
    pub(crate) inner: Box<[T]>,
}

impl<T> Array<T> {
    /// Creates a new Array with size 0.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::{Array, Sequence};
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert!(arr.is_empty());
    /// ```
    pub fn new() -> Array<T> {
        Array {
            inner: Box::default(),
        }
    }

    /// Creates an Array that takes over the storage of `list`. No elements are copied and the
    /// List is consumed.
    pub fn from_list(list: List<T>) -> Array<T> {
        list.into_array()
    }

    /// Consumes the Array, returning a [`List`] that owns the same storage.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::Array;
    /// let mut list = Array::from([1, 2]).into_list();
    /// list.add(3);
    /// assert_eq!(&*list, &[1, 2, 3]);
    /// ```
    pub fn into_list(self) -> List<T> {
        List::from(self.inner.into_vec())
    }

    /// Returns a [`List`] holding a copy of every element. The Array remains untouched by any later
    /// change to the List.
    pub fn to_list(&self) -> List<T>
    where
        T: Clone,
    {
        List::from(self.inner.to_vec())
    }

    /// Returns the contents of the Array as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// Consumes the Array, returning the underlying boxed slice.
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.inner
    }
}

impl<T> Sequence<T> for Array<T> {}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    /// Creates an Array holding the provided values, in order.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::Array;
    /// let arr = Array::from([1, 2, 3]);
    /// assert_eq!(&*arr, [1, 2, 3]);
    /// ```
    fn from(values: [T; N]) -> Self {
        Array {
            inner: Box::new(values),
        }
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(values: Vec<T>) -> Self {
        Array {
            inner: values.into_boxed_slice(),
        }
    }
}

impl<T> From<Box<[T]>> for Array<T> {
    fn from(inner: Box<[T]>) -> Self {
        Array { inner }
    }
}

impl<T> From<List<T>> for Array<T> {
    fn from(list: List<T>) -> Self {
        list.into_array()
    }
}

impl<T: Clone> From<&[T]> for Array<T> {
    fn from(values: &[T]) -> Self {
        Array {
            inner: values.into(),
        }
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &debug_with(|f| f.debug_list().entries(self.iter()).finish()))
            .field("size", &self.size())
            .finish()
    }
}

impl<T: Display> Display for Array<T> {
    /// Writes every element separated by `", "`. See [`Sequence::join_with`] for other separators.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join_with(", "))
    }
}
