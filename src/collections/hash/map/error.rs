use std::error::Error;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "json")]
use derive_more::{Display, Error, From, IsVariant};

/// Returned when parallel key and value sequences used to build a mapping differ in length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch {
    pub keys: usize,
    pub values: usize,
}

impl Display for LengthMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The number of keys does not equal the number of values ({} != {})!",
            self.keys, self.values
        )
    }
}

impl Error for LengthMismatch {}

/// Returned when a key can't be written as a JSON object key, because it doesn't serialize to a
/// JSON string. Holds the JSON text the key did serialize to.
#[cfg(feature = "json")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonStringKey {
    pub key: String,
}

#[cfg(feature = "json")]
impl Display for NonStringKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Key '{}' is not a string! JSON objects must have strings for their keys.",
            self.key
        )
    }
}

#[cfg(feature = "json")]
impl Error for NonStringKey {}

/// The ways exporting a mapping as a JSON object can fail.
#[cfg(feature = "json")]
#[derive(Debug, Display, Error, From, IsVariant)]
pub enum ToObjectError {
    NonStringKey(NonStringKey),
    Json(serde_json::Error),
}
