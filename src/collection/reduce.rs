//! The Reducer: folding a collection into a single accumulated value.
//!
//! Both entry points first materialize the collection's values in traversal
//! order, so for a mapping the "first element" is the value of the
//! first-enumerated key and the `index` passed to the combining function is
//! the value's position in that order.

use super::traversable::Traversable;
use crate::error::{Result, UnderbarError};

fn values<C>(collection: &C) -> Result<impl Iterator<Item = (usize, &C::Item)>>
where
    C: Traversable + ?Sized,
{
    Ok(collection.pairs()?.map(|(_, value)| value).enumerate())
}

/// Reduces `collection` to a single value of its element type.
///
/// With `Some(seed)`, every element is passed to
/// `combine(accumulator, element, index)` starting from `seed`. With `None`,
/// the first element becomes the accumulator and is not itself passed to
/// `combine`; combining starts from the second element (index `1`).
///
/// # Errors
///
/// - [`InvalidCollection`](UnderbarError::InvalidCollection) if `collection`
///   is neither a sequence nor a mapping.
/// - [`EmptyReductionWithoutSeed`](UnderbarError::EmptyReductionWithoutSeed)
///   if `collection` is empty and `seed` is `None`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reduce;
/// use underbar::UnderbarError;
///
/// let add = |total: i32, number: &i32, _| total + number;
///
/// assert_eq!(reduce(&[1, 2, 3], add, Some(0)), Ok(6));
/// assert_eq!(reduce(&[5], |total, number: &i32, _| total + number * number, None), Ok(5));
/// assert_eq!(
///     reduce(&Vec::<i32>::new(), add, None),
///     Err(UnderbarError::EmptyReductionWithoutSeed)
/// );
/// ```
pub fn reduce<C, F>(collection: &C, mut combine: F, seed: Option<C::Item>) -> Result<C::Item>
where
    C: Traversable + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &C::Item, usize) -> C::Item,
{
    let mut remaining = values(collection)?;
    let accumulator = match seed {
        Some(seed) => seed,
        None => match remaining.next() {
            Some((_, first)) => first.clone(),
            None => return Err(UnderbarError::EmptyReductionWithoutSeed),
        },
    };
    Ok(remaining.fold(accumulator, |accumulator, (index, value)| {
        combine(accumulator, value, index)
    }))
}

/// Reduces `collection` starting from `seed`, whose type may differ from
/// the element type.
///
/// This is the seeded form of [`reduce`]: every element is passed to
/// `combine(accumulator, element, index)`.
///
/// # Errors
///
/// Returns [`InvalidCollection`](UnderbarError::InvalidCollection) if
/// `collection` is neither a sequence nor a mapping.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{Mapping, fold};
///
/// let stock: Mapping<u32> = [("apples", 3), ("pears", 0)].into();
/// let summary = fold(&stock, String::new(), |summary, count, index| {
///     format!("{summary}{index}:{count};")
/// })
/// .unwrap();
/// assert_eq!(summary, "0:3;1:0;");
/// ```
pub fn fold<C, A, F>(collection: &C, seed: A, mut combine: F) -> Result<A>
where
    C: Traversable + ?Sized,
    F: FnMut(A, &C::Item, usize) -> A,
{
    Ok(values(collection)?.fold(seed, |accumulator, (index, value)| {
        combine(accumulator, value, index)
    }))
}

/// Returns `true` if any element equals `target`.
///
/// # Errors
///
/// Fails like [`fold`].
///
/// # Examples
///
/// ```rust
/// use underbar::collection::contains;
///
/// assert_eq!(contains(&["a", "b"], &"b"), Ok(true));
/// assert_eq!(contains(&["a", "b"], &"c"), Ok(false));
/// ```
pub fn contains<C>(collection: &C, target: &C::Item) -> Result<bool>
where
    C: Traversable + ?Sized,
    C::Item: PartialEq,
{
    fold(collection, false, |was_found, value, _| {
        was_found || value == target
    })
}
