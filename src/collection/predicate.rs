//! Predicate combinators built on the Reducer.
//!
//! [`every`] folds with a boolean accumulator that, once `false`, is carried
//! to the end without calling the predicate again. [`some`] is the negation
//! of [`every`] over the negated predicate, so it inherits the same
//! short-circuit: the predicate is never called after the first element that
//! satisfies it.

use super::reduce::fold;
use super::traversable::Traversable;
use super::truthy::Truthy;
use crate::error::Result;

/// Returns `true` if every element passes `predicate(element, index)`.
///
/// An empty collection yields `true`. After the first failing element the
/// predicate is not called again.
///
/// # Errors
///
/// Returns [`InvalidCollection`](crate::UnderbarError::InvalidCollection) if
/// `collection` is neither a sequence nor a mapping.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::every;
///
/// let mut calls = 0;
/// let all_even = every(&[2, 3, 6], |number, _| {
///     calls += 1;
///     number % 2 == 0
/// });
/// assert_eq!(all_even, Ok(false));
/// assert_eq!(calls, 2);
/// ```
pub fn every<C, P>(collection: &C, mut predicate: P) -> Result<bool>
where
    C: Traversable + ?Sized,
    P: FnMut(&C::Item, usize) -> bool,
{
    fold(collection, true, |is_every, value, index| {
        is_every && predicate(value, index)
    })
}

/// [`every`] with truthiness as the predicate.
///
/// # Errors
///
/// Fails like [`every`].
///
/// # Examples
///
/// ```rust
/// use underbar::collection::every_truthy;
///
/// assert_eq!(every_truthy(&[1, 2, 3]), Ok(true));
/// assert_eq!(every_truthy(&["a", ""]), Ok(false));
/// ```
pub fn every_truthy<C>(collection: &C) -> Result<bool>
where
    C: Traversable + ?Sized,
    C::Item: Truthy,
{
    every(collection, |value, _| value.is_truthy())
}

/// Returns `true` if at least one element passes `predicate(element, index)`.
///
/// An empty collection yields `false`. After the first passing element the
/// predicate is not called again.
///
/// # Errors
///
/// Fails like [`every`].
///
/// # Examples
///
/// ```rust
/// use underbar::collection::some;
///
/// assert_eq!(some(&[1, 3, 5], |number, _| number % 2 == 0), Ok(false));
/// assert_eq!(some(&[1, 2, 3], |number, _| number % 2 == 0), Ok(true));
/// ```
pub fn some<C, P>(collection: &C, mut predicate: P) -> Result<bool>
where
    C: Traversable + ?Sized,
    P: FnMut(&C::Item, usize) -> bool,
{
    every(collection, |value, index| !predicate(value, index)).map(|none_pass| !none_pass)
}

/// [`some`] with truthiness as the predicate.
///
/// # Errors
///
/// Fails like [`every`].
pub fn some_truthy<C>(collection: &C) -> Result<bool>
where
    C: Traversable + ?Sized,
    C::Item: Truthy,
{
    some(collection, |value, _| value.is_truthy())
}
