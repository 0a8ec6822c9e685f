//! Set and list combinators expressed through the Iterator and the Reducer.

use std::cmp::Ordering;

use super::iterate::map;
use super::reduce::fold;
use super::traversable::Traversable;
use super::value::Value;
use crate::error::Result;

/// Returns the distinct elements in order of first appearance.
///
/// # Errors
///
/// Returns [`InvalidCollection`](crate::UnderbarError::InvalidCollection) if
/// `collection` is neither a sequence nor a mapping.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::uniq;
///
/// assert_eq!(uniq(&[3, 1, 3, 2, 1]), Ok(vec![3, 1, 2]));
/// ```
pub fn uniq<C>(collection: &C) -> Result<Vec<C::Item>>
where
    C: Traversable + ?Sized,
    C::Item: PartialEq + Clone,
{
    fold(collection, Vec::new(), |mut distinct, value, _| {
        if !distinct.contains(value) {
            distinct.push(value.clone());
        }
        distinct
    })
}

/// Returns the elements sorted by the criterion `key` computes for each.
///
/// The sort is stable and `key` is evaluated once per element. Criteria
/// that cannot be ordered against each other (such as `NaN`) compare equal.
///
/// # Errors
///
/// Fails like [`uniq`].
///
/// # Examples
///
/// ```rust
/// use underbar::collection::sort_by;
///
/// let words = ["kiwi", "fig", "banana"];
/// assert_eq!(sort_by(&words, |word| word.len()), Ok(vec!["fig", "kiwi", "banana"]));
/// ```
pub fn sort_by<C, K, F>(collection: &C, mut key: F) -> Result<Vec<C::Item>>
where
    C: Traversable + ?Sized,
    C::Item: Clone,
    K: PartialOrd,
    F: FnMut(&C::Item) -> K,
{
    let mut decorated = map(collection, |value, _| (key(value), value.clone()))?;
    decorated.sort_by(|(left, _), (right, _)| left.partial_cmp(right).unwrap_or(Ordering::Equal));
    Ok(decorated.into_iter().map(|(_, value)| value).collect())
}

/// Groups the elements at each index across `sequences`.
///
/// The result is as long as the longest input; shorter inputs contribute
/// `None` past their end.
///
/// # Errors
///
/// Never fails for slices; the `Result` keeps the signature uniform with the
/// other combinators.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::zip;
///
/// let letters = ["a", "b", "c"];
/// let numbers = ["1", "2"];
/// assert_eq!(
///     zip(&[&letters[..], &numbers[..]]),
///     Ok(vec![
///         vec![Some("a"), Some("1")],
///         vec![Some("b"), Some("2")],
///         vec![Some("c"), None],
///     ])
/// );
/// ```
pub fn zip<T: Clone>(sequences: &[&[T]]) -> Result<Vec<Vec<Option<T>>>> {
    let longest = fold(sequences, 0, |longest, sequence, _| longest.max(sequence.len()))?;
    Ok((0..longest)
        .map(|index| {
            sequences
                .iter()
                .map(|sequence| sequence.get(index).cloned())
                .collect()
        })
        .collect())
}

/// An arbitrarily nested list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    /// A single element.
    Item(T),
    /// A nested list of elements.
    List(Vec<Nested<T>>),
}

fn flatten_into<T: Clone>(flattened: Vec<T>, nested: &[Nested<T>]) -> Result<Vec<T>> {
    fold(nested, Ok(flattened), |flattened: Result<Vec<T>>, next, _| {
        let mut flattened = flattened?;
        match next {
            Nested::Item(item) => flattened.push(item.clone()),
            Nested::List(list) => flattened = flatten_into(flattened, list)?,
        }
        Ok(flattened)
    })?
}

/// Flattens a nested list into a single sequence, depth first.
///
/// # Errors
///
/// Never fails for slices; the `Result` keeps the signature uniform with the
/// other combinators.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{Nested, flatten};
///
/// let nested = [
///     Nested::Item(1),
///     Nested::List(vec![Nested::Item(2), Nested::List(vec![Nested::Item(3)])]),
/// ];
/// assert_eq!(flatten(&nested), Ok(vec![1, 2, 3]));
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Result<Vec<T>> {
    flatten_into(Vec::new(), nested)
}

fn flatten_value_into(flattened: Vec<Value>, collection: &Value) -> Result<Vec<Value>> {
    fold(collection, Ok(flattened), |flattened: Result<Vec<Value>>, next, _| {
        let mut flattened = flattened?;
        match next {
            Value::Array(_) => flattened = flatten_value_into(flattened, next)?,
            other => flattened.push(other.clone()),
        }
        Ok(flattened)
    })?
}

/// Flattens every nested array inside `collection` into one sequence.
///
/// Objects nested inside arrays are kept as single elements.
///
/// # Errors
///
/// Returns [`InvalidCollection`](crate::UnderbarError::InvalidCollection) if
/// `collection` is neither an array nor an object.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{Value, flatten_values};
///
/// let nested = Value::from(vec![Value::from(1), Value::from(vec![2, 3])]);
/// assert_eq!(
///     flatten_values(&nested),
///     Ok(vec![Value::from(1), Value::from(2), Value::from(3)])
/// );
/// ```
pub fn flatten_values(collection: &Value) -> Result<Vec<Value>> {
    flatten_value_into(Vec::new(), collection)
}

/// Returns the elements present in every one of `sequences`.
///
/// The shortest sequence determines the order of the result.
///
/// # Errors
///
/// Never fails for slices; the `Result` keeps the signature uniform with the
/// other combinators.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::intersection;
///
/// let primes = [2, 3, 5, 7];
/// let odds = [7, 5, 3, 1, 9];
/// assert_eq!(intersection(&[&primes[..], &odds[..]]), Ok(vec![3, 5, 7]));
/// ```
pub fn intersection<T: PartialEq + Clone>(sequences: &[&[T]]) -> Result<Vec<T>> {
    let Some(shortest) = sequences.iter().copied().min_by_key(|sequence| sequence.len()) else {
        return Ok(Vec::new());
    };
    fold(shortest, Vec::new(), |mut shared, element, _| {
        if sequences.iter().all(|sequence| sequence.contains(element)) {
            shared.push(element.clone());
        }
        shared
    })
}

/// Returns the elements of `sequence` that appear in none of `others`.
///
/// # Errors
///
/// Never fails for slices; the `Result` keeps the signature uniform with the
/// other combinators.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::difference;
///
/// let tens = [2, 30];
/// let fours = [4];
/// assert_eq!(difference(&[1, 2, 3, 4], &[&tens[..], &fours[..]]), Ok(vec![1, 3]));
/// ```
pub fn difference<T: PartialEq + Clone>(sequence: &[T], others: &[&[T]]) -> Result<Vec<T>> {
    fold(sequence, Vec::new(), |mut remaining, element, _| {
        if !others.iter().any(|other| other.contains(element)) {
            remaining.push(element.clone());
        }
        remaining
    })
}
