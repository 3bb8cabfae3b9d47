//! Encoding tabular data as CSV text.
//!
//! A [`CsvEncoder`] takes an [`Array`](crate::collections::Array) of rows, each a
//! [`Dictionary`](crate::collections::Dictionary) of column names to [`CsvValue`]s, and compiles
//! them into a header line followed by one quoted line per row. The columns are the keys of the
//! first row.

mod encoder;
mod error;
mod value;

pub use encoder::*;
pub use error::*;
pub use value::*;
