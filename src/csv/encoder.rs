use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, RandomState};

use super::{CsvValue, EmptyInput};
use crate::collections::{Array, Dictionary, List, Sequence};

/// Compiles a sequence of rows into CSV text.
///
/// The header line is the first row's keys, in that row's order, joined by the separator and
/// left unquoted. Every row (including the first) then contributes one line with a cell per
/// header key. Each cell is wrapped in double quotes; quotes or separators inside a value are not
/// escaped. A key that is missing from a row produces an empty cell, as does any falsy value
/// (see [`CsvValue::is_falsy`]) unless [`blank_falsy`](CsvEncoder::blank_falsy) is disabled.
/// Lines are joined with `\n` and there is no trailing newline.
///
/// # Examples
/// ```
/// # use standard_collections::collections::{Array, Dictionary};
/// # use standard_collections::csv::{CsvEncoder, CsvValue};
/// let rows: Array<Dictionary<_, _>> = Array::from([
///     Dictionary::from([("a".to_string(), CsvValue::from("1")), ("b".into(), "2".into())]),
///     Dictionary::from([("a".to_string(), CsvValue::from(3.0)), ("b".into(), 0.0.into())]),
/// ]);
///
/// let csv = CsvEncoder::new(rows).compile().unwrap();
/// assert_eq!(csv, "a,b\n\"1\",\"2\"\n\"3\",\"\"");
/// ```
pub struct CsvEncoder<B: BuildHasher = RandomState> {
    rows: Array<Dictionary<String, CsvValue, B>>,
    separator: char,
    blank_falsy: bool,
}

impl<B: BuildHasher> CsvEncoder<B> {
    /// Creates an encoder for `rows`, separating cells with `,` and blanking falsy values.
    pub const fn new(rows: Array<Dictionary<String, CsvValue, B>>) -> CsvEncoder<B> {
        CsvEncoder {
            rows,
            separator: ',',
            blank_falsy: true,
        }
    }

    /// Sets the character placed between header names and between cells.
    pub const fn separator(mut self, separator: char) -> CsvEncoder<B> {
        self.separator = separator;
        self
    }

    /// Sets whether falsy values are written as empty cells. When disabled, only missing keys
    /// produce empty cells and values such as `0` or `false` are written as they display.
    pub const fn blank_falsy(mut self, blank_falsy: bool) -> CsvEncoder<B> {
        self.blank_falsy = blank_falsy;
        self
    }

    /// Returns the rows the encoder was created with.
    pub const fn rows(&self) -> &Array<Dictionary<String, CsvValue, B>> {
        &self.rows
    }

    /// Consumes the encoder, returning its rows.
    pub fn into_rows(self) -> Array<Dictionary<String, CsvValue, B>> {
        self.rows
    }

    /// Compiles the rows into CSV text.
    ///
    /// # Errors
    /// Returns [`EmptyInput`] if there are no rows to take the header from.
    pub fn compile(&self) -> Result<String, EmptyInput> {
        let Some(first) = self.rows.first() else {
            tracing::debug!("refused to compile CSV without rows");
            return Err(EmptyInput);
        };

        let separator = self.separator.to_string();
        let keys = first.keys();
        let mut csv = keys.join_with(&separator);

        for row in self.rows.iter() {
            let cells: List<String> = keys
                .iter()
                .map(|key| self.cell(row.get(key.as_str())))
                .collect();

            csv.push('\n');
            csv.push_str(&cells.join_with(&separator));
        }

        tracing::debug!(rows = self.rows.size(), columns = keys.size(), bytes = csv.len(), "compiled CSV");
        Ok(csv)
    }

    fn cell(&self, value: Option<&CsvValue>) -> String {
        match value {
            Some(value) if !(self.blank_falsy && value.is_falsy()) => format!("\"{value}\""),
            _ => String::from("\"\""),
        }
    }
}

impl<B: BuildHasher> From<Array<Dictionary<String, CsvValue, B>>> for CsvEncoder<B> {
    fn from(rows: Array<Dictionary<String, CsvValue, B>>) -> Self {
        CsvEncoder::new(rows)
    }
}

impl<B: BuildHasher> Debug for CsvEncoder<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsvEncoder")
            .field("rows", &self.rows.size())
            .field("separator", &self.separator)
            .field("blank_falsy", &self.blank_falsy)
            .finish()
    }
}
