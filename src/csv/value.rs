use std::fmt::{self, Display, Formatter};

use derive_more::{From, IsVariant};

/// A single CSV cell. Text, numbers and booleans are accepted.
///
/// Numbers are written the way a JavaScript runtime prints them: the shortest digits that read
/// back as the same value, with no fractional part for integral values, exponent notation below
/// `1e-6` and from `1e21` up, and `NaN`, `Infinity` and `-Infinity` for the non-finite values.
///
/// # Examples
/// ```
/// # use standard_collections::csv::CsvValue;
/// assert_eq!(CsvValue::from(3.0).to_string(), "3");
/// assert_eq!(CsvValue::from(0.25).to_string(), "0.25");
/// assert_eq!(CsvValue::from(1.5e-7).to_string(), "1.5e-7");
/// assert_eq!(CsvValue::from(f64::NEG_INFINITY).to_string(), "-Infinity");
/// assert_eq!(CsvValue::from("text").to_string(), "text");
/// ```
#[derive(Debug, Clone, PartialEq, From, IsVariant)]
pub enum CsvValue {
    Text(String),
    Number(f64),
    Boolean(bool),
}

impl CsvValue {
    /// Returns true for the values that count as false in a boolean context: the empty string,
    /// zero (of either sign), NaN and `false`.
    pub fn is_falsy(&self) -> bool {
        match self {
            CsvValue::Text(text) => text.is_empty(),
            CsvValue::Number(number) => *number == 0.0 || number.is_nan(),
            CsvValue::Boolean(boolean) => !boolean,
        }
    }
}

impl From<&str> for CsvValue {
    fn from(text: &str) -> Self {
        CsvValue::Text(text.to_owned())
    }
}

impl From<i32> for CsvValue {
    fn from(number: i32) -> Self {
        CsvValue::Number(number.into())
    }
}

impl From<u32> for CsvValue {
    fn from(number: u32) -> Self {
        CsvValue::Number(number.into())
    }
}

impl Display for CsvValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CsvValue::Text(text) => f.write_str(text),
            CsvValue::Number(number) => write_number(*number, f),
            CsvValue::Boolean(boolean) => write!(f, "{boolean}"),
        }
    }
}

/// Decimal exponents (of the form `0.ddd × 10^n`) for which JavaScript writes a number without
/// exponent notation: `MIN_FIXED_POINT < n <= MAX_FIXED_POINT`.
const MAX_FIXED_POINT: i32 = 21;
const MIN_FIXED_POINT: i32 = -6;

fn write_number(number: f64, f: &mut Formatter<'_>) -> fmt::Result {
    if number.is_nan() {
        return f.write_str("NaN");
    }
    if number.is_infinite() {
        return f.write_str(if number > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if number == 0.0 {
        // Covers -0.
        return f.write_str("0");
    }

    // `{:e}` yields the shortest digits that round-trip, as `d.ddde<exponent>`.
    let scientific = format!("{:e}", number.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return f.write_str(&scientific);
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return f.write_str(&scientific);
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let len = digits.len() as i32;
    let point = exponent + 1;

    if number < 0.0 {
        f.write_str("-")?;
    }

    if len <= point && point <= MAX_FIXED_POINT {
        write!(f, "{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= MAX_FIXED_POINT {
        let (whole, fraction) = digits.split_at(point as usize);
        write!(f, "{whole}.{fraction}")
    } else if MIN_FIXED_POINT < point && point <= 0 {
        write!(f, "0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let (lead, rest) = digits.split_at(1);
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        if rest.is_empty() {
            write!(f, "{lead}e{exponent_sign}{}", exponent.unsigned_abs())
        } else {
            write!(f, "{lead}.{rest}e{exponent_sign}{}", exponent.unsigned_abs())
        }
    }
}
