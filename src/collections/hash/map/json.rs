use std::hash::{BuildHasher, Hash};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{Map, NonStringKey, ToObjectError};

impl<K: Hash + Eq + Serialize, V: Serialize, B: BuildHasher> Map<K, V, B> {
    /// Exports the Map as a JSON object, keeping insertion order. Every key must serialize to a
    /// JSON string.
    ///
    /// # Errors
    /// Returns [`ToObjectError::NonStringKey`] for the first key that serializes to anything other
    /// than a string, or [`ToObjectError::Json`] if a key or value fails to serialize at all.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::Map;
    /// let map: Map<_, _> = Map::from([("b", 2), ("a", 1)]);
    /// let object = map.to_native_object().unwrap();
    /// assert_eq!(object.keys().collect::<Vec<_>>(), ["b", "a"]);
    ///
    /// let numbered: Map<_, _> = Map::from([(1, "one")]);
    /// assert!(numbered.to_native_object().unwrap_err().is_non_string_key());
    /// ```
    pub fn to_native_object(&self) -> Result<serde_json::Map<String, Value>, ToObjectError> {
        let mut object = serde_json::Map::with_capacity(self.size());

        for (key, value) in self.iter() {
            let key = match serde_json::to_value(key)? {
                Value::String(key) => key,
                other => {
                    tracing::debug!(key = %other, "rejected non-string key during JSON export");
                    return Err(ToObjectError::from(NonStringKey {
                        key: other.to_string(),
                    }));
                },
            };
            object.insert(key, serde_json::to_value(value)?);
        }

        Ok(object)
    }

    /// Exports the Map as a JSON [`Value::Object`]. See [`Map::to_native_object`].
    ///
    /// # Errors
    /// Fails in the same cases as [`Map::to_native_object`].
    pub fn to_json_value(&self) -> Result<Value, ToObjectError> {
        self.to_native_object().map(Value::Object)
    }

    /// Exports the Map as compact JSON text. See [`Map::to_native_object`].
    ///
    /// # Errors
    /// Fails in the same cases as [`Map::to_native_object`].
    pub fn to_json_string(&self) -> Result<String, ToObjectError> {
        Ok(serde_json::to_string(&self.to_native_object()?)?)
    }
}

impl<V: DeserializeOwned, B: BuildHasher + Default> Map<String, V, B> {
    /// Creates a Map from the members of a JSON object, in the object's order.
    ///
    /// # Errors
    /// Returns an error if any member's value can't be deserialized as `V`.
    pub fn from_native_object(object: serde_json::Map<String, Value>) -> Result<Self, serde_json::Error> {
        let mut map = Map::with_cap(object.len());
        for (key, value) in object {
            map.set(key, serde_json::from_value(value)?);
        }
        Ok(map)
    }

    /// Parses `json` as a JSON object and creates a Map from its members.
    ///
    /// # Errors
    /// Returns an error if `json` isn't a valid JSON object or any value can't be deserialized as
    /// `V`.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::Map;
    /// let map: Map<String, u8> = Map::from_json_str(r#"{"x": 1, "y": 2}"#).unwrap();
    /// assert_eq!(map.get("y"), Some(&2));
    /// assert!(Map::<String, u8>::from_json_str("[1, 2]").is_err());
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        Self::from_native_object(serde_json::from_str(json)?)
    }
}
