//! Insertion-ordered, string-keyed mapping.
//!
//! [`Mapping`] is the key-labeled variant of a collection. Its enumeration
//! order is the order in which keys were first inserted; re-inserting an
//! existing key replaces the value without moving the key.
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::Mapping;
//!
//! let mut mapping = Mapping::new();
//! mapping.insert("b", 2);
//! mapping.insert("a", 1);
//! mapping.insert("b", 20);
//!
//! let keys: Vec<&str> = mapping.keys().collect();
//! assert_eq!(keys, vec!["b", "a"]);
//! assert_eq!(mapping.get("b"), Some(&20));
//! ```

use std::fmt;

/// A string-keyed map that enumerates its entries in insertion order.
///
/// Lookups are linear scans. The type is meant for the small, record-like
/// mappings that collection helpers operate on, not as a general-purpose
/// hash map.
#[derive(Clone, PartialEq, Eq)]
pub struct Mapping<V> {
    entries: Vec<(String, V)>,
}

impl<V> Mapping<V> {
    /// Creates an empty mapping.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty mapping with room for `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the mapping has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(entry_key, _)| entry_key == key)
    }

    /// Returns a reference to the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.position(key).map(|index| &self.entries[index].1)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.position(key).map(|index| &mut self.entries[index].1)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Inserts `value` under `key`, returning the previous value if any.
    ///
    /// An existing key keeps its enumeration position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::collection::Mapping;
    ///
    /// let mut mapping = Mapping::new();
    /// assert_eq!(mapping.insert("x", 1), None);
    /// assert_eq!(mapping.insert("x", 2), Some(1));
    /// assert_eq!(mapping.len(), 1);
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes `key`, returning its value. Later entries keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.position(key)
            .map(|index| self.entries.remove(index).1)
    }

    /// Iterates over the keys in enumeration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterates over the values in enumeration order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Iterates over `(key, value)` pairs in enumeration order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Consumes the mapping, returning its values in enumeration order.
    pub fn into_values(self) -> Vec<V> {
        self.entries.into_iter().map(|(_, value)| value).collect()
    }
}

impl<V> Default for Mapping<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Mapping<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over the entries of a [`Mapping`].
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    inner: std::slice::Iter<'a, (String, V)>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key.as_str(), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a Mapping<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> IntoIterator for Mapping<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Mapping<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterable: I) -> Self {
        let mut mapping = Self::new();
        mapping.extend(iterable);
        mapping
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for Mapping<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iterable: I) {
        for (key, value) in iterable {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V, const N: usize> From<[(K, V); N]> for Mapping<V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(feature = "serde")]
impl<V: serde::Serialize> serde::Serialize for Mapping<V> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
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
struct MappingVisitor<V> {
    value_marker: std::marker::PhantomData<V>,
}

#[cfg(feature = "serde")]
impl<'de, V> serde::de::Visitor<'de> for MappingVisitor<V>
where
    V: serde::Deserialize<'de>,
{
    type Value = Mapping<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with string keys")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut mapping = Mapping::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            mapping.insert(key, value);
        }
        Ok(mapping)
    }
}

#[cfg(feature = "serde")]
impl<'de, V> serde::Deserialize<'de> for Mapping<V>
where
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(MappingVisitor {
            value_marker: std::marker::PhantomData,
        })
    }
}
