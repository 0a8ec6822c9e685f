//! The traversal capability shared by every collection operation.
//!
//! Every core operation is written once against [`Traversable`], whose only
//! job is to produce `(key-or-index, value)` pairs in a defined order. Ordered
//! sequences yield [`Key::Index`] in ascending order; mappings yield
//! [`Key::Name`] in the mapping's own enumeration order.
//!
//! [`Collection`] is the tagged two-variant form for callers that want to hold
//! "a sequence or a mapping" in one value without deciding up front.

use std::collections::{BTreeMap, HashMap, btree_map, hash_map};
use std::fmt;
use std::iter::Enumerate;
use std::slice;

use super::mapping::{self, Mapping};
use super::value::Value;
use crate::error::{Result, UnderbarError};

/// The position of an element: an index into a sequence or a key of a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// Zero-based position in an ordered sequence.
    Index(usize),
    /// Key of a mapping entry.
    Name(&'a str),
}

impl Key<'_> {
    /// Returns the index if this key addresses a sequence element.
    pub const fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }

    /// Returns the name if this key addresses a mapping entry.
    pub const fn as_name(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(name),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => formatter.write_str(name),
        }
    }
}

enum PairsInner<'a, V> {
    Sequence(Enumerate<slice::Iter<'a, V>>),
    Mapping(mapping::Iter<'a, V>),
    Ordered(btree_map::Iter<'a, String, V>),
    Hashed(hash_map::Iter<'a, String, V>),
}

/// Iterator over the `(key, value)` pairs of a traversable collection.
pub struct Pairs<'a, V> {
    inner: PairsInner<'a, V>,
}

impl<'a, V> Pairs<'a, V> {
    /// Pairs of an ordered sequence, keyed by index.
    pub fn sequence(elements: &'a [V]) -> Self {
        Self {
            inner: PairsInner::Sequence(elements.iter().enumerate()),
        }
    }

    /// Pairs of a [`Mapping`], in insertion order.
    pub fn mapping(mapping: &'a Mapping<V>) -> Self {
        Self {
            inner: PairsInner::Mapping(mapping.iter()),
        }
    }

    /// Pairs of a [`BTreeMap`], in key order.
    pub fn ordered(map: &'a BTreeMap<String, V>) -> Self {
        Self {
            inner: PairsInner::Ordered(map.iter()),
        }
    }

    /// Pairs of a [`HashMap`], in its unspecified iteration order.
    pub fn hashed(map: &'a HashMap<String, V>) -> Self {
        Self {
            inner: PairsInner::Hashed(map.iter()),
        }
    }
}

impl<'a, V> Iterator for Pairs<'a, V> {
    type Item = (Key<'a>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            PairsInner::Sequence(inner) => inner
                .next()
                .map(|(index, value)| (Key::Index(index), value)),
            PairsInner::Mapping(inner) => inner.next().map(|(key, value)| (Key::Name(key), value)),
            PairsInner::Ordered(inner) => inner
                .next()
                .map(|(key, value)| (Key::Name(key.as_str()), value)),
            PairsInner::Hashed(inner) => inner
                .next()
                .map(|(key, value)| (Key::Name(key.as_str()), value)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            PairsInner::Sequence(inner) => inner.size_hint(),
            PairsInner::Mapping(inner) => inner.size_hint(),
            PairsInner::Ordered(inner) => inner.size_hint(),
            PairsInner::Hashed(inner) => inner.size_hint(),
        }
    }
}

impl<V> ExactSizeIterator for Pairs<'_, V> {}

/// Types that can be visited as `(key, value)` pairs in a defined order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{Key, Mapping, Traversable};
///
/// let mapping: Mapping<i32> = [("x", 1), ("y", 2)].into();
/// let pairs: Vec<(Key<'_>, &i32)> = mapping.pairs().unwrap().collect();
/// assert_eq!(pairs, vec![(Key::Name("x"), &1), (Key::Name("y"), &2)]);
/// ```
pub trait Traversable {
    /// The element type.
    type Item;

    /// Returns the pairs of this collection.
    ///
    /// # Errors
    ///
    /// Returns [`UnderbarError::InvalidCollection`] if the value is neither an
    /// ordered sequence nor a mapping.
    fn pairs(&self) -> Result<Pairs<'_, Self::Item>>;
}

impl<V> Traversable for [V] {
    type Item = V;

    fn pairs(&self) -> Result<Pairs<'_, V>> {
        Ok(Pairs::sequence(self))
    }
}

impl<V, const N: usize> Traversable for [V; N] {
    type Item = V;

    fn pairs(&self) -> Result<Pairs<'_, V>> {
        Ok(Pairs::sequence(self))
    }
}

impl<V> Traversable for Vec<V> {
    type Item = V;

    fn pairs(&self) -> Result<Pairs<'_, V>> {
        Ok(Pairs::sequence(self))
    }
}

impl<V> Traversable for Mapping<V> {
    type Item = V;

    fn pairs(&self) -> Result<Pairs<'_, V>> {
        Ok(Pairs::mapping(self))
    }
}

impl<V> Traversable for BTreeMap<String, V> {
    type Item = V;

    fn pairs(&self) -> Result<Pairs<'_, V>> {
        Ok(Pairs::ordered(self))
    }
}

impl<V, S> Traversable for HashMap<String, V, S> {
    type Item = V;

    fn pairs(&self) -> Result<Pairs<'_, V>> {
        Ok(Pairs {
            inner: PairsInner::Hashed(self.iter()),
        })
    }
}

impl Traversable for Value {
    type Item = Self;

    fn pairs(&self) -> Result<Pairs<'_, Self>> {
        match self {
            Self::Array(elements) => Ok(Pairs::sequence(elements)),
            Self::Object(mapping) => Ok(Pairs::mapping(mapping)),
            other => Err(UnderbarError::InvalidCollection {
                found: other.kind_name(),
            }),
        }
    }
}

/// An ordered sequence or a key-labeled mapping.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{Collection, Mapping, reduce};
///
/// let sequence = Collection::from(vec![1, 2, 3]);
/// let mapping = Collection::from(Mapping::from([("a", 1), ("b", 2), ("c", 3)]));
///
/// let add = |total: i32, value: &i32, _| total + value;
/// assert_eq!(reduce(&sequence, add, None), Ok(6));
/// assert_eq!(reduce(&mapping, add, None), Ok(6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collection<V> {
    /// Integer-indexed elements in insertion order.
    Sequence(Vec<V>),
    /// String-keyed entries in the mapping's enumeration order.
    Mapping(Mapping<V>),
}

impl<V> Collection<V> {
    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(elements) => elements.len(),
            Self::Mapping(mapping) => mapping.len(),
        }
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` for the sequence variant.
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Consumes the collection, returning its values in traversal order.
    pub fn into_values(self) -> Vec<V> {
        match self {
            Self::Sequence(elements) => elements,
            Self::Mapping(mapping) => mapping.into_values(),
        }
    }
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self::Sequence(Vec::new())
    }
}

impl<V> Traversable for Collection<V> {
    type Item = V;

    fn pairs(&self) -> Result<Pairs<'_, V>> {
        match self {
            Self::Sequence(elements) => Ok(Pairs::sequence(elements)),
            Self::Mapping(mapping) => Ok(Pairs::mapping(mapping)),
        }
    }
}

impl<V> From<Vec<V>> for Collection<V> {
    fn from(elements: Vec<V>) -> Self {
        Self::Sequence(elements)
    }
}

impl<V> From<Mapping<V>> for Collection<V> {
    fn from(mapping: Mapping<V>) -> Self {
        Self::Mapping(mapping)
    }
}

impl TryFrom<Value> for Collection<Value> {
    type Error = UnderbarError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(elements) => Ok(Self::Sequence(elements)),
            Value::Object(mapping) => Ok(Self::Mapping(mapping)),
            other => Err(UnderbarError::InvalidCollection {
                found: other.kind_name(),
            }),
        }
    }
}
