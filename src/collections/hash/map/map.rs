use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::future::Future;
use std::hash::{BuildHasher, Hash, RandomState};
use std::{cmp, mem};

use super::{Iter, LengthMismatch};
use crate::collections::contiguous::Array;
use crate::collections::hash::Dictionary;
use crate::util::fmt::{DebugRaw, debug_with};

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 4;
const LOAD_FACTOR_DENOMINATOR: usize = 5;

/// A map of unique keys to values which remembers the order its keys were first inserted in. Keys
/// must implement [`Hash`] and [`Eq`].
///
/// Entries are stored contiguously in insertion order, with a separate open-addressing table of
/// buckets (linear probing, load factor 4/5) mapping hashes to entry positions. Setting a key that
/// is already present replaces its value but keeps its position.
///
/// It is a logic error for keys in a Map to be manipulated in a way that changes their hash.
/// Because of this, Map's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the Map.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `set` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `contains_key` | `O(1)`* |
/// | `remove` | `O(n)` |
/// | `contains_value` | `O(n)` |
/// | `get_key` | `O(n)` |
/// | `keys` / `values` | `O(n)` |
///
/// \* In the event of a hash collision, these functions will take additional time, while a valid
/// / correct location is found.
///
/// \** If the Map doesn't have enough capacity for the new entry, `set` will take `O(n)`. \*
/// applies as well.
///
/// # Examples
/// ```
/// # use standard_collections::collections::{Map, Sequence};
/// let mut map: Map<_, _> = Map::new();
/// map.set("b", 2);
/// map.set("a", 1);
/// map.set("b", 3);
///
/// assert_eq!(map.get("b"), Some(&3));
/// assert_eq!(map.keys().join_with(","), "b,a");
/// assert_eq!(map.get_key(&1), Some(&"a"));
/// ```
pub struct Map<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) entries: Vec<(K, V)>,
    pub(crate) buckets: Vec<Bucket>,
    pub(crate) hasher: B,
}

/// The position of an entry in `entries`, if the bucket is occupied.
pub(crate) type Bucket = Option<usize>;

impl<K: Hash + Eq, V, B: BuildHasher + Default> Map<K, V, B> {
    /// Creates a new Map with capacity 0 and the default value for `B`. Memory will be allocated
    /// when the first entry is set.
    pub fn new() -> Map<K, V, B> {
        Map::with_hasher(B::default())
    }

    /// Creates a new Map with space for at least `cap` entries before reallocating. The default
    /// hasher will be used.
    pub fn with_cap(cap: usize) -> Map<K, V, B> {
        Map::with_cap_and_hasher(cap, B::default())
    }

    /// Creates a Map from parallel sequences of keys and values, pairing them up by position.
    /// Where a key repeats, the later value wins.
    ///
    /// # Errors
    /// Returns [`LengthMismatch`] if `keys` and `values` don't have the same number of elements.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::Map;
    /// let map: Map<_, _> = Map::from_keys_and_values(["a", "b"], [1, 2]).unwrap();
    /// assert_eq!(map.get("b"), Some(&2));
    ///
    /// assert!(Map::<&str, i32>::from_keys_and_values(["a"], [1, 2]).is_err());
    /// ```
    pub fn from_keys_and_values<IK, IV>(keys: IK, values: IV) -> Result<Map<K, V, B>, LengthMismatch>
    where
        IK: IntoIterator<Item = K>,
        IV: IntoIterator<Item = V>,
    {
        let keys: Vec<K> = keys.into_iter().collect();
        let values: Vec<V> = values.into_iter().collect();

        if keys.len() != values.len() {
            tracing::debug!(keys = keys.len(), values = values.len(), "rejected parallel map construction");
            return Err(LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }

        let mut map = Map::with_cap(keys.len());
        for (key, value) in keys.into_iter().zip(values) {
            map.set(key, value);
        }
        Ok(map)
    }

    /// Creates a Map that takes over the entries of `dictionary`.
    pub fn from_dictionary(dictionary: Dictionary<K, V, B>) -> Map<K, V, B> {
        dictionary.into_map()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Map<K, V, B> {
    /// Creates a new Map with capacity 0 and the provided `hasher`.
    pub const fn with_hasher(hasher: B) -> Map<K, V, B> {
        Map {
            entries: Vec::new(),
            buckets: Vec::new(),
            hasher,
        }
    }

    /// Creates a new Map with space for at least `cap` entries and the provided `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> Map<K, V, B> {
        Map {
            entries: Vec::with_capacity(cap),
            buckets: vec![None; Self::buckets_for(cap)],
            hasher,
        }
    }

    /// Returns the number of entries in the Map.
    pub const fn size(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the Map contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the number of entries the Map can hold before it needs to grow.
    pub const fn cap(&self) -> usize {
        self.buckets.len() * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR
    }

    /// Associates `value` with `key`, growing the Map if required. If the key was already
    /// present, its value is replaced and the previous one is returned. The key keeps its original
    /// position in that case.
    ///
    /// # Panics
    /// Panics if the required capacity overflows [`usize`].
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        if self.should_grow() {
            self.grow()
        }

        let Some(index) = self.find_index_for_key(&key) else {
            unreachable!("Map has buckets after growing!")
        };

        // The bucket at index is either empty or refers to an equal key.
        match self.buckets[index] {
            Some(entry) => Some(mem::replace(&mut self.entries[entry].1, value)),
            None => {
                self.buckets[index] = Some(self.entries.len());
                self.entries.push((key, value));
                None
            },
        }
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let entry = self.find_entry(key)?;
        let (key, value) = &self.entries[entry];
        Some((key, value))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the Map
    /// contains no value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// Map contains no value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let entry = self.find_entry(key)?;
        Some(&mut self.entries[entry].1)
    }

    /// Returns the key of the first entry (in insertion order) whose value equals `value`. This is
    /// a linear scan.
    pub fn get_key(&self, value: &V) -> Option<&K>
    where
        V: PartialEq,
    {
        self.iter().find(|(_, v)| *v == value).map(|(key, _)| key)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_entry(key).is_some()
    }

    /// Returns true if any entry has a value equal to `value`. This is a linear scan.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.entries.iter().any(|(_, v)| v == value)
    }

    /// Returns true if `key` is present and associated with a value equal to `value`.
    pub fn contains_entry<Q>(&self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: PartialEq,
    {
        self.get(key) == Some(value)
    }

    /// Removes the entry associated with `key`, returning it if it exists. Later entries keep
    /// their relative order.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index_for_key(key)?;
        let entry = self.buckets[index].take()?;

        self.close_gap(index);
        Some(self.remove_at(entry))
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes the first entry (in insertion order) whose value equals `value`, returning it.
    pub fn remove_value(&mut self, value: &V) -> Option<(K, V)>
    where
        V: PartialEq,
    {
        let entry = self.entries.iter().position(|(_, v)| v == value)?;
        let index = self.find_index_for_key(&self.entries[entry].0)?;

        self.buckets[index] = None;
        self.close_gap(index);
        Some(self.remove_at(entry))
    }

    /// Removes every entry from the Map, keeping the allocated capacity.
    pub fn remove_all(&mut self) {
        self.entries.clear();
        self.buckets.fill(None);
    }

    /// Returns an [`Array`] of references to every key, in insertion order.
    ///
    /// The Array is a new value, so bind it before taking a [`Cursor`](crate::collections::Cursor)
    /// over it: the cursor borrows the Array.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::{Map, Sequence};
    /// let map: Map<_, _> = Map::from([("a", 1), ("b", 2)]);
    ///
    /// let keys = map.keys();
    /// let mut cursor = keys.cursor();
    /// assert_eq!(cursor.next(), Ok(&&"a"));
    /// assert_eq!(cursor.next(), Ok(&&"b"));
    /// assert!(!cursor.has_next());
    /// ```
    pub fn keys(&self) -> Array<&K> {
        self.entries.iter().map(|(key, _)| key).collect()
    }

    /// Returns an [`Array`] of references to every value, in the same order as
    /// [`keys`](Map::keys).
    pub fn values(&self) -> Array<&V> {
        self.entries.iter().map(|(_, value)| value).collect()
    }

    /// Returns an iterator over all key-value pairs in insertion order, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all values in insertion order, as mutable references.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.iter_mut().map(|(_, value)| value)
    }

    /// Calls `callback` with each key and value, in insertion order.
    pub fn for_each<F: FnMut(&K, &V)>(&self, mut callback: F) {
        for (key, value) in self.iter() {
            callback(key, value);
        }
    }

    /// Calls `callback` with each key and value in insertion order, awaiting the returned future
    /// before moving on to the next entry. The first error returned by a callback stops the
    /// iteration and is returned.
    pub async fn for_each_async<'a, F, Fut, E>(&'a self, mut callback: F) -> Result<(), E>
    where
        F: FnMut(&'a K, &'a V) -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        for (key, value) in self.entries.iter() {
            callback(key, value).await?;
        }
        Ok(())
    }

    /// Increases the capacity of the Map to ensure that size + `extra` entries will fit without
    /// exceeding the load factor.
    ///
    /// # Panics
    /// Panics if the required capacity overflows [`usize`].
    pub fn reserve(&mut self, extra: usize) {
        let Some(required) = self.size().checked_add(extra) else {
            panic!("Map capacity overflow!")
        };
        self.entries.reserve(extra);

        let new_buckets = Self::buckets_for(required);
        if new_buckets > self.buckets.len() {
            self.rehash(new_buckets);
        }
    }

    /// Consumes the Map, returning a read-only [`Dictionary`] that owns the same entries.
    pub fn into_dictionary(self) -> Dictionary<K, V, B> {
        Dictionary::from(self)
    }

    /// Returns a read-only [`Dictionary`] holding a copy of every entry, a snapshot that later
    /// changes to the Map won't affect.
    pub fn to_dictionary(&self) -> Dictionary<K, V, B>
    where
        K: Clone,
        V: Clone,
        B: Clone,
    {
        Dictionary::from(self.clone())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Map<K, V, B> {
    /// The number of buckets required to hold `cap` entries without exceeding the load factor.
    pub(crate) const fn buckets_for(cap: usize) -> usize {
        (cap * LOAD_FACTOR_DENOMINATOR).div_ceil(LOAD_FACTOR_NUMERATOR)
    }

    /// Determines whether the Map's size has reached the load capacity, suggesting that it should
    /// grow before inserting new entries.
    pub(crate) const fn should_grow(&self) -> bool {
        self.entries.len() >= self.cap()
    }

    /// Grows the Map by the growth factor, ensuring that it can hold additional entries.
    pub(crate) fn grow(&mut self) {
        let new_len = cmp::max(self.buckets.len() * GROWTH_FACTOR, MIN_ALLOCATED_CAP);

        self.rehash(new_len)
    }

    /// Replaces the bucket table with one of `new_len` buckets, placing every entry again. The new
    /// table must have room for every entry under the load factor.
    pub(crate) fn rehash(&mut self, new_len: usize) {
        let mut buckets: Vec<Bucket> = vec![None; new_len];

        for (entry, (key, _)) in self.entries.iter().enumerate() {
            let mut index = Self::bucket_index(&self.hasher, key, new_len);

            while buckets[index].is_some() {
                index = (index + 1) % new_len;
            }

            buckets[index] = Some(entry);
        }

        tracing::trace!(
            from = self.buckets.len(),
            to = new_len,
            size = self.entries.len(),
            "rehashed map buckets"
        );
        self.buckets = buckets;
    }

    /// Calculates the ideal bucket for `hashable` within a table of `len` buckets. `len` must not
    /// be 0.
    pub(crate) fn bucket_index<H: Hash + ?Sized>(hasher: &B, hashable: &H, len: usize) -> usize {
        (hasher.hash_one(hashable) % len as u64) as usize
    }

    /// Calculates the ideal index of a bucket for the provided `hashable` (or None if the Map has
    /// no buckets). This method doesn't consider hash collisions, see
    /// [`Map::find_index_for_key`] for that functionality.
    pub(crate) fn index_from_key<H: Hash + ?Sized>(&self, hashable: &H) -> Option<usize> {
        match self.buckets.len() {
            0 => None,
            len => Some(Self::bucket_index(&self.hasher, hashable, len)),
        }
    }

    /// Finds the first valid bucket for the provided `key` (or None if the Map has no buckets).
    /// This is done by calculating the ideal index and then probing until a bucket is found that
    /// is empty or refers to an equal key.
    pub(crate) fn find_index_for_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut index = self.index_from_key(key)?;

        // The load factor guarantees at least one empty bucket, so this terminates.
        while let Some(entry) = self.buckets[index] {
            if self.entries[entry].0.borrow() == key {
                break;
            }
            index = (index + 1) % self.buckets.len();
        }

        Some(index)
    }

    /// Returns the position in `entries` of the entry for `key`, if there is one.
    pub(crate) fn find_entry<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index_for_key(key)?;
        self.buckets[index]
    }

    /// Backward-shift deletion: after the bucket at `hole` has been emptied, moves later entries
    /// of the same probe run back so that every entry stays reachable from its ideal bucket.
    pub(crate) fn close_gap(&mut self, mut hole: usize) {
        let len = self.buckets.len();
        let mut probe = (hole + 1) % len;

        while let Some(entry) = self.buckets[probe] {
            let ideal = Self::bucket_index(&self.hasher, &self.entries[entry].0, len);

            // The entry can fill the hole if the hole lies on its path from the ideal bucket.
            if (probe + len - ideal) % len >= (probe + len - hole) % len {
                self.buckets[hole] = self.buckets[probe].take();
                hole = probe;
            }

            probe = (probe + 1) % len;
        }
    }

    /// Removes the entry at `entry` from the entry list. Its bucket must already be cleared.
    /// Buckets referring to later entries are shifted to match.
    pub(crate) fn remove_at(&mut self, entry: usize) -> (K, V) {
        let removed = self.entries.remove(entry);

        for bucket in self.buckets.iter_mut().flatten() {
            if *bucket > entry {
                *bucket -= 1;
            }
        }

        removed
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for Map<K, V, B> {
    fn default() -> Self {
        Map::new()
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for Map<K, V, B> {
    fn clone(&self) -> Self {
        Map {
            entries: self.entries.clone(),
            buckets: self.buckets.clone(),
            hasher: self.hasher.clone(),
        }
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for Map<K, V, B> {
    /// Two Maps are equal if they hold the same key-value pairs, regardless of insertion order.
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size()
            && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for Map<K, V, B> {}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for Map<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for Map<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default, const N: usize> From<[(K, V); N]> for Map<K, V, B> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Hash + Eq, V, S, B: BuildHasher + Default> From<HashMap<K, V, S>> for Map<K, V, B> {
    /// Creates a Map from a standard library [`HashMap`]. The resulting order is the HashMap's
    /// iteration order, which is unspecified.
    fn from(map: HashMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher, S: BuildHasher + Default> From<Map<K, V, B>> for HashMap<K, V, S> {
    /// Moves the entries of a Map into a standard library [`HashMap`], which doesn't keep their
    /// order.
    fn from(map: Map<K, V, B>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> From<Dictionary<K, V, B>> for Map<K, V, B> {
    fn from(dictionary: Dictionary<K, V, B>) -> Self {
        dictionary.into_map()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for Map<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("entries", &debug_with(|f| f.debug_map().entries(self.iter()).finish()))
            .field("buckets", &debug_with(|f| {
                f.debug_list()
                    .entries(self.buckets.iter().map(|bucket| DebugRaw(match bucket {
                        Some(entry) => entry.to_string(),
                        None => "-".into(),
                    })))
                    .finish()
            }))
            .field("size", &self.size())
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Hash + Eq + Display, V: Display, B: BuildHasher> Display for Map<K, V, B> {
    /// Writes the entries in insertion order, as `{key: value, ...}`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}
