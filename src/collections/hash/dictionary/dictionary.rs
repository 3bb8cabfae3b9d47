use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::Deref;

use crate::collections::hash::map::{IntoIter, Iter, LengthMismatch, Map};

/// A read-only [`Map`]. Dictionary dereferences to a shared `Map`, so every lookup, `keys`,
/// `values`, `iter` and the JSON export are available, but no method can change its entries.
///
/// Convert it back with [`Dictionary::into_map`] (moving the entries) or [`Dictionary::to_map`]
/// (copying them).
///
/// # Examples
/// ```
/// # use standard_collections::collections::{Dictionary, Map};
/// let dict: Dictionary<_, _> = Map::from([("a", 1), ("b", 2)]).into_dictionary();
/// assert_eq!(dict.get("a"), Some(&1));
/// assert_eq!(dict.size(), 2);
///
/// let mut map = dict.into_map();
/// map.set("c", 3);
/// assert_eq!(map.size(), 3);
/// ```
pub struct Dictionary<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) inner: Map<K, V, B>,
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Dictionary<K, V, B> {
    /// Creates an empty Dictionary.
    pub fn new() -> Dictionary<K, V, B> {
        Dictionary { inner: Map::new() }
    }

    /// Creates a Dictionary from parallel sequences of keys and values. See
    /// [`Map::from_keys_and_values`].
    ///
    /// # Errors
    /// Returns [`LengthMismatch`] if `keys` and `values` don't have the same number of elements.
    pub fn from_keys_and_values<IK, IV>(keys: IK, values: IV) -> Result<Dictionary<K, V, B>, LengthMismatch>
    where
        IK: IntoIterator<Item = K>,
        IV: IntoIterator<Item = V>,
    {
        Map::from_keys_and_values(keys, values).map(Dictionary::from)
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Dictionary<K, V, B> {
    /// Consumes the Dictionary, returning a [`Map`] that owns the same entries.
    pub fn into_map(self) -> Map<K, V, B> {
        self.inner
    }

    /// Returns a [`Map`] holding a copy of every entry. Changes to the Map don't affect the
    /// Dictionary.
    pub fn to_map(&self) -> Map<K, V, B>
    where
        K: Clone,
        V: Clone,
        B: Clone,
    {
        self.inner.clone()
    }
}

#[cfg(feature = "json")]
impl<V: serde::de::DeserializeOwned, B: BuildHasher + Default> Dictionary<String, V, B> {
    /// Creates a Dictionary from the members of a JSON object. See [`Map::from_native_object`].
    ///
    /// # Errors
    /// Returns an error if any member's value can't be deserialized as `V`.
    pub fn from_native_object(
        object: serde_json::Map<String, serde_json::Value>,
    ) -> Result<Self, serde_json::Error> {
        Map::from_native_object(object).map(Dictionary::from)
    }

    /// Parses `json` as a JSON object and creates a Dictionary from its members.
    ///
    /// # Errors
    /// Returns an error if `json` isn't a valid JSON object or any value can't be deserialized as
    /// `V`.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        Map::from_json_str(json).map(Dictionary::from)
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Deref for Dictionary<K, V, B> {
    type Target = Map<K, V, B>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> AsRef<Map<K, V, B>> for Dictionary<K, V, B> {
    fn as_ref(&self) -> &Map<K, V, B> {
        &self.inner
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> From<Map<K, V, B>> for Dictionary<K, V, B> {
    fn from(inner: Map<K, V, B>) -> Self {
        Dictionary { inner }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default, const N: usize> From<[(K, V); N]> for Dictionary<K, V, B> {
    fn from(entries: [(K, V); N]) -> Self {
        Dictionary::from(Map::from(entries))
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for Dictionary<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Dictionary::from(Map::from_iter(iter))
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> IntoIterator for Dictionary<K, V, B> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a Dictionary<K, V, B> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for Dictionary<K, V, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for Dictionary<K, V, B> {
    fn clone(&self) -> Self {
        Dictionary {
            inner: self.inner.clone(),
        }
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for Dictionary<K, V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for Dictionary<K, V, B> {}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Debug for Dictionary<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Hash + Eq + Display, V: Display, B: BuildHasher> Display for Dictionary<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}
