//! Restricted-access sequences built on [`List`](super::List): the last-in first-out [`Stack`]
//! and the first-in first-out [`Queue`]. Both expose their front element at index 0, so
//! iteration and [`into_list`](Stack::into_list) start with the next value to be taken.

mod queue;
mod stack;

pub use queue::*;
pub use stack::*;
