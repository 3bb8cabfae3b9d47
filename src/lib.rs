//! A small set of generic collection wrappers layered over Rust's native storage: a mutable
//! [`List`](collections::List) and immutable [`Array`](collections::Array), an insertion-ordered
//! [`Map`](collections::Map) with its read-only [`Dictionary`](collections::Dictionary), and the
//! [`ListSet`](collections::ListSet), [`Stack`](collections::Stack) and
//! [`Queue`](collections::Queue) types composed on top of them. A [`Cursor`](collections::Cursor)
//! provides explicit `has_next` / `next` iteration and [`csv`] turns rows of dictionaries into CSV
//! text.
//!
//! # Mutable and Immutable Pairs
//! Every mutable type has an immutable counterpart and conversions go both ways. A conversion
//! either moves the backing storage (`into_*` and the [`From`] impls, which consume the source) or
//! clones it (`to_*`, a snapshot). Because of that, an immutable view can never observe a later
//! mutation of the value it was built from.
//!
//! # Absent Values
//! Out-of-range lookups return [`None`] rather than an error. Only shape problems produce errors:
//! mismatched key/value lengths, keys that can't be written as JSON object keys, encoding an empty
//! CSV and calling [`Cursor::next`](collections::Cursor::next) past the end.
//!
//! # Error Handling
//! Errors are strongly typed structs implementing [`Error`](std::error::Error), composed into enums
//! with `derive_more` where one operation can fail in more than one way.
//!
//! # Features
//! - `json` (default): JSON object import / export for [`Map`](collections::Map) and
//!   [`Dictionary`](collections::Dictionary), backed by `serde_json`.
//! - `csv` (default): the [`csv`] encoder.
//!
//! # Logging
//! The crate emits `tracing` events at `debug` and `trace` level and never installs a subscriber.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
#[cfg(feature = "csv")]
pub mod csv;

pub(crate) mod util;
