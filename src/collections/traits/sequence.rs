use std::fmt::{Display, Write};
use std::future::Future;
use std::ops::Deref;

use crate::collections::cursor::Cursor;

/// The read surface shared by ordered, index-addressable collections.
///
/// Element access itself (`get`, `contains`, `is_empty`, `first`, `iter`, ...) comes from the
/// `[T]` that implementors dereference to. Out-of-range access through `get` returns [`None`], the
/// absent value, and never panics.
pub trait Sequence<T>: Deref<Target = [T]> {
    /// Returns the number of elements in the sequence.
    fn size(&self) -> usize {
        self.len()
    }

    /// Returns the index of the first element equal to `value`, or [`None`] if there isn't one.
    /// This is a linear scan.
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Joins the display representation of every element with `separator`. The [`Display`] impls
    /// of the implementing types call this with `", "`.
    fn join_with(&self, separator: &str) -> String
    where
        T: Display,
    {
        let mut joined = String::new();
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                joined.push_str(separator);
            }
            // Writing into a String can't fail.
            let _ = write!(joined, "{item}");
        }
        joined
    }

    /// Creates a [`Cursor`] positioned before the first element.
    fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.deref())
    }

    /// Calls `callback` on each element, in order.
    fn for_each<F: FnMut(&T)>(&self, callback: F) {
        self.iter().for_each(callback)
    }

    /// Calls `callback` on each element in order, awaiting the returned future before moving on
    /// to the next element. The first error returned by a callback stops the iteration and is
    /// returned.
    fn for_each_async<'a, F, Fut, E>(
        &'a self,
        mut callback: F,
    ) -> impl Future<Output = Result<(), E>> + 'a
    where
        T: 'a,
        F: FnMut(&'a T) -> Fut + 'a,
        Fut: Future<Output = Result<(), E>> + 'a,
        E: 'a,
    {
        let items: &'a [T] = self.deref();
        async move {
            for item in items {
                callback(item).await?;
            }
            Ok(())
        }
    }
}
