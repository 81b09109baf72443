//! Insertion-ordered dictionaries.
//!
//! Every keyed result produced by this crate is a [`Dict`]: a hash map that
//! remembers the order in which keys were first inserted. Overwriting an
//! existing key replaces its value but keeps its position, which is exactly
//! the behaviour `merge` and `associate` need.
//!
//! Keys are bounded by [`ArrayKey`] (integers and string-likes).
//!
//! # Time Complexity
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | `insert`         | O(1)*      |
//! | `get`            | O(1)*      |
//! | `contains_key`   | O(1)*      |
//! | `first` / `last` | O(1)       |
//! | `pop`            | O(1)*      |
//! | `len`            | O(1)       |
//! | `iter`           | O(n)       |
//!
//! \* expected, amortized
//!
//! # Examples
//!
//! ```rust
//! use traverso::dict;
//! use traverso::dict::Dict;
//!
//! let mut scores: Dict<&str, i32> = dict! { "b" => 2, "a" => 1 };
//! scores.insert("b", 20);
//! scores.insert("c", 3);
//!
//! let keys: Vec<&&str> = scores.keys().collect();
//! assert_eq!(keys, vec![&"b", &"a", &"c"]);
//! assert_eq!(scores.get("b"), Some(&20));
//! ```

mod array_key;
mod iter;

pub use array_key::ArrayKey;
pub use iter::{IntoIter, IntoKeys, IntoValues, Iter, Keys, Values};

use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

/// An insertion-ordered hash map.
///
/// Entries are stored densely in insertion order; a hash index maps each key
/// to its position. Equality is order-sensitive: two dictionaries are equal
/// only if they hold the same entries in the same order.
///
/// # Examples
///
/// ```rust
/// use traverso::dict::Dict;
///
/// let dict: Dict<i32, char> = [(3, 'c'), (1, 'a'), (3, 'C')].into_iter().collect();
///
/// // later writes win, first position is kept
/// assert_eq!(dict.len(), 2);
/// assert_eq!(dict.first(), Some((&3, &'C')));
/// assert_eq!(dict.last(), Some((&1, &'a')));
/// ```
#[derive(Clone)]
pub struct Dict<K, V> {
    entries: Vec<(K, V)>,
    positions: FxHashMap<K, usize>,
}

impl<K, V> Dict<K, V> {
    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the first inserted entry.
    #[inline]
    pub fn first(&self) -> Option<(&K, &V)> {
        self.entries.first().map(|(key, value)| (key, value))
    }

    /// Returns the most recently inserted entry.
    #[inline]
    pub fn last(&self) -> Option<(&K, &V)> {
        self.entries.last().map(|(key, value)| (key, value))
    }

    /// Returns the entry at `index` in insertion order.
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.entries.get(index).map(|(key, value)| (key, value))
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.entries.iter(),
        }
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            inner: self.entries.iter(),
        }
    }

    /// Consumes the dictionary, yielding keys in insertion order.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys {
            inner: self.entries.into_iter(),
        }
    }

    /// Consumes the dictionary, yielding values in insertion order.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues {
            inner: self.entries.into_iter(),
        }
    }
}

impl<K: ArrayKey, V> Dict<K, V> {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    /// Creates an empty dictionary with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Inserts `value` under `key`.
    ///
    /// A new key is appended at the end. An existing key keeps its position
    /// and its previous value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traverso::dict::Dict;
    ///
    /// let mut dict = Dict::new();
    /// assert_eq!(dict.insert("a", 1), None);
    /// assert_eq!(dict.insert("b", 2), None);
    /// assert_eq!(dict.insert("a", 3), Some(1));
    /// assert_eq!(dict.first(), Some((&"a", &3)));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.slot_mut(&key) {
            return Some(std::mem::replace(slot, value));
        }
        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Inserts `value` under `key` only if the key is not present yet.
    ///
    /// Returns `true` if the entry was inserted.
    pub fn insert_if_absent(&mut self, key: K, value: V) -> bool {
        if self.positions.contains_key(&key) {
            return false;
        }
        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        true
    }

    /// Returns a reference to the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = *self.positions.get(key)?;
        self.entries.get(position).map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slot_mut(key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(key)
    }

    /// Removes and returns the most recently inserted entry.
    pub fn pop(&mut self) -> Option<(K, V)> {
        let (key, value) = self.entries.pop()?;
        self.positions.remove(&key);
        Some((key, value))
    }

    fn slot_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = *self.positions.get(key)?;
        self.entries.get_mut(position).map(|(_, value)| value)
    }
}

impl<K: ArrayKey, V> Default for Dict<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Dict<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Dict<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for Dict<K, V> {}

impl<K: ArrayKey, V> FromIterator<(K, V)> for Dict<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut dict = Self::with_capacity(iter.size_hint().0);
        dict.extend(iter);
        dict
    }
}

impl<K: ArrayKey, V> Extend<(K, V)> for Dict<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> IntoIterator for Dict<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a Dict<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Dict<String, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Iter<'static, String, i32>: Send, Sync);

/// Builds a [`Dict`] from `key => value` pairs, in order.
///
/// Duplicate keys behave like repeated [`Dict::insert`] calls: the last value
/// wins and the first position is kept.
///
/// # Examples
///
/// ```rust
/// use traverso::dict;
/// use traverso::dict::Dict;
///
/// let empty: Dict<u8, u8> = dict! {};
/// assert!(empty.is_empty());
///
/// let dict = dict! { "x" => 1, "y" => 2, "x" => 3 };
/// assert_eq!(dict.len(), 2);
/// assert_eq!(dict.get("x"), Some(&3));
/// ```
#[macro_export]
macro_rules! dict {
    () => {
        $crate::dict::Dict::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        <$crate::dict::Dict<_, _> as ::core::iter::FromIterator<_>>::from_iter([
            $(($key, $value)),+
        ])
    };
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for Dict<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct DictVisitor<K, V> {
    marker: std::marker::PhantomData<fn() -> Dict<K, V>>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for DictVisitor<K, V>
where
    K: serde::Deserialize<'de> + ArrayKey,
    V: serde::Deserialize<'de>,
{
    type Value = Dict<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut dict = Dict::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry()? {
            dict.insert(key, value);
        }
        Ok(dict)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for Dict<K, V>
where
    K: serde::Deserialize<'de> + ArrayKey,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(DictVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_is_empty() {
        let dict: Dict<i32, i32> = Dict::new();
        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);
        assert_eq!(dict.first(), None);
        assert_eq!(dict.last(), None);
    }

    #[rstest]
    fn test_insert_appends_new_keys_in_order() {
        let mut dict = Dict::new();
        dict.insert("c", 3);
        dict.insert("a", 1);
        dict.insert("b", 2);

        let entries: Vec<(&&str, &i32)> = dict.iter().collect();
        assert_eq!(entries, vec![(&"c", &3), (&"a", &1), (&"b", &2)]);
    }

    #[rstest]
    fn test_insert_existing_key_keeps_position() {
        let mut dict = Dict::new();
        dict.insert(1, "one");
        dict.insert(2, "two");

        assert_eq!(dict.insert(1, "uno"), Some("one"));
        assert_eq!(dict.get_index(0), Some((&1, &"uno")));
        assert_eq!(dict.len(), 2);
    }

    #[rstest]
    fn test_insert_if_absent_ignores_existing_key() {
        let mut dict = Dict::new();
        assert!(dict.insert_if_absent('x', 1));
        assert!(!dict.insert_if_absent('x', 2));
        assert_eq!(dict.get(&'x'), Some(&1));
    }

    #[rstest]
    fn test_get_with_borrowed_key() {
        let mut dict: Dict<String, i32> = Dict::new();
        dict.insert("alpha".to_string(), 1);

        assert_eq!(dict.get("alpha"), Some(&1));
        assert!(dict.contains_key("alpha"));
        assert!(!dict.contains_key("beta"));
    }

    #[rstest]
    fn test_get_mut_updates_in_place() {
        let mut dict = Dict::new();
        dict.insert(7_u8, 10);
        if let Some(value) = dict.get_mut(&7) {
            *value += 5;
        }
        assert_eq!(dict.get(&7), Some(&15));
    }

    #[rstest]
    fn test_pop_removes_last_and_its_index() {
        let mut dict = Dict::new();
        dict.insert("a", 1);
        dict.insert("b", 2);

        assert_eq!(dict.pop(), Some(("b", 2)));
        assert!(!dict.contains_key("b"));
        dict.insert("b", 3);
        assert_eq!(dict.last(), Some((&"b", &3)));
        assert_eq!(dict.len(), 2);
    }

    #[rstest]
    fn test_equality_is_order_sensitive() {
        let forward: Dict<i32, i32> = [(1, 1), (2, 2)].into_iter().collect();
        let backward: Dict<i32, i32> = [(2, 2), (1, 1)].into_iter().collect();
        assert_ne!(forward, backward);
        assert_eq!(forward, forward.clone());
    }

    #[rstest]
    fn test_debug_renders_as_map() {
        let dict = crate::dict! { "a" => 1, "b" => 2 };
        assert_eq!(format!("{dict:?}"), r#"{"a": 1, "b": 2}"#);
    }

    #[rstest]
    fn test_owned_iterators() {
        let dict = crate::dict! { 1 => 'a', 2 => 'b' };
        assert_eq!(dict.clone().into_keys().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(dict.clone().into_values().collect::<Vec<_>>(), vec!['a', 'b']);
        assert_eq!(dict.into_iter().rev().collect::<Vec<_>>(), vec![(2, 'b'), (1, 'a')]);
    }

    #[rstest]
    fn test_iterators_report_exact_size() {
        let dict = crate::dict! { 1 => 1, 2 => 2, 3 => 3 };
        assert_eq!(dict.iter().len(), 3);
        assert_eq!(dict.keys().len(), 3);
        assert_eq!(dict.values().last(), Some(&3));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn test_serde_roundtrip_preserves_order() {
        let dict = crate::dict! { "z".to_string() => 1, "a".to_string() => 2 };
        let json = serde_json::to_string(&dict).unwrap();
        assert_eq!(json, r#"{"z":1,"a":2}"#);

        let restored: Dict<String, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, dict);
    }
}
