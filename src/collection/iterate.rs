//! The Iterator (`each`) and the helpers that are thin layers over it.

use super::traversable::{Key, Traversable};
use crate::error::Result;

/// Returns its argument unchanged.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Calls `callback(value, key, collection)` for every element of `collection`.
///
/// Sequences are visited at indices `0..len` in ascending order; mappings are
/// visited in their enumeration order. The collection is only borrowed, so it
/// cannot be modified during the traversal.
///
/// # Errors
///
/// Returns [`InvalidCollection`](crate::UnderbarError::InvalidCollection) if
/// `collection` is neither a sequence nor a mapping. The callback is never
/// invoked in that case.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::each;
///
/// let mut visited = Vec::new();
/// each(&vec!["a", "b"], |value, key, _| visited.push((key.as_index(), *value))).unwrap();
/// assert_eq!(visited, vec![(Some(0), "a"), (Some(1), "b")]);
/// ```
pub fn each<C, F>(collection: &C, mut callback: F) -> Result<()>
where
    C: Traversable + ?Sized,
    F: FnMut(&C::Item, Key<'_>, &C),
{
    for (key, value) in collection.pairs()? {
        callback(value, key, collection);
    }
    Ok(())
}

/// Collects `function(value, key)` for every element into a new sequence.
///
/// # Errors
///
/// Fails like [`each`].
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{Mapping, map};
///
/// let prices: Mapping<u32> = [("apple", 3), ("pear", 4)].into();
/// let labels = map(&prices, |price, key| format!("{key}={price}")).unwrap();
/// assert_eq!(labels, vec!["apple=3", "pear=4"]);
/// ```
pub fn map<C, U, F>(collection: &C, mut function: F) -> Result<Vec<U>>
where
    C: Traversable + ?Sized,
    F: FnMut(&C::Item, Key<'_>) -> U,
{
    let mut mapped = Vec::new();
    each(collection, |value, key, _| mapped.push(function(value, key)))?;
    Ok(mapped)
}

/// Returns the key of the first element equal to `target`.
///
/// # Errors
///
/// Fails like [`each`].
pub fn index_of<'a, C>(collection: &'a C, target: &C::Item) -> Result<Option<Key<'a>>>
where
    C: Traversable + ?Sized,
    C::Item: PartialEq,
{
    Ok(collection
        .pairs()?
        .find_map(|(key, value)| (value == target).then_some(key)))
}

/// Returns the first element that passes `test`.
///
/// Scanning stops at the first match.
///
/// # Errors
///
/// Fails like [`each`].
pub fn find<'a, C, P>(collection: &'a C, mut test: P) -> Result<Option<&'a C::Item>>
where
    C: Traversable + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    Ok(collection
        .pairs()?
        .map(|(_, value)| value)
        .find(|value| test(value)))
}

/// Returns clones of the elements that pass `test`, in traversal order.
///
/// # Errors
///
/// Fails like [`each`].
///
/// # Examples
///
/// ```rust
/// use underbar::collection::filter;
///
/// let evens = filter(&[1, 2, 3, 4], |number| number % 2 == 0).unwrap();
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn filter<C, P>(collection: &C, mut test: P) -> Result<Vec<C::Item>>
where
    C: Traversable + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    let mut kept = Vec::new();
    each(collection, |value, _, _| {
        if test(value) {
            kept.push(value.clone());
        }
    })?;
    Ok(kept)
}

/// Returns clones of the elements that fail `test`, in traversal order.
///
/// # Errors
///
/// Fails like [`each`].
pub fn reject<C, P>(collection: &C, mut test: P) -> Result<Vec<C::Item>>
where
    C: Traversable + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    filter(collection, |value| !test(value))
}
