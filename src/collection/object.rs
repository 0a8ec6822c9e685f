//! Helpers over mapping-like elements: merging, field extraction and
//! per-element invocation.
//!
//! Shape is never inspected at run time. Merging works on [`Mapping`],
//! field access goes through the [`Field`] trait, and the callable is chosen
//! by the caller: [`invoke`] applies a function to any element, while
//! [`invoke_method`] looks a method up by name through [`Methods`].

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use super::iterate::map;
use super::mapping::Mapping;
use super::traversable::Traversable;
use super::value::Value;
use crate::error::{Result, UnderbarError};

/// Copies every entry of each source into `target`, left to right.
///
/// Later sources overwrite keys set by earlier ones.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{Mapping, extend};
///
/// let mut target = Mapping::from([("a", 1)]);
/// let first = Mapping::from([("b", 2)]);
/// let second = Mapping::from([("a", 3)]);
/// extend(&mut target, &[&first, &second]);
/// assert_eq!(target, Mapping::from([("a", 3), ("b", 2)]));
/// ```
pub fn extend<'t, V: Clone>(
    target: &'t mut Mapping<V>,
    sources: &[&Mapping<V>],
) -> &'t mut Mapping<V> {
    for source in sources {
        for (key, value) in *source {
            target.insert(key, value.clone());
        }
    }
    target
}

/// Like [`extend`], but never overwrites a key that is already present.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{Mapping, defaults};
///
/// let mut options = Mapping::from([("retries", 5)]);
/// let fallback = Mapping::from([("retries", 1), ("timeout", 30)]);
/// defaults(&mut options, &[&fallback]);
/// assert_eq!(options.get("retries"), Some(&5));
/// assert_eq!(options.get("timeout"), Some(&30));
/// ```
pub fn defaults<'t, V: Clone>(
    target: &'t mut Mapping<V>,
    sources: &[&Mapping<V>],
) -> &'t mut Mapping<V> {
    for source in sources {
        for (key, value) in *source {
            if !target.contains_key(key) {
                target.insert(key, value.clone());
            }
        }
    }
    target
}

/// Elements that expose named fields.
pub trait Field {
    /// The type of a field's value.
    type Output;

    /// Returns the field called `name`, if present.
    fn field(&self, name: &str) -> Option<&Self::Output>;
}

impl<V> Field for Mapping<V> {
    type Output = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V> Field for BTreeMap<String, V> {
    type Output = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V, S: BuildHasher> Field for HashMap<String, V, S> {
    type Output = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl Field for Value {
    type Output = Self;

    /// Objects are looked up by key; arrays accept a decimal index.
    fn field(&self, name: &str) -> Option<&Self> {
        match self {
            Self::Object(mapping) => mapping.get(name),
            Self::Array(elements) => name
                .parse::<usize>()
                .ok()
                .and_then(|index| elements.get(index)),
            _ => None,
        }
    }
}

/// Extracts the field `name` from every element.
///
/// Elements without the field contribute `None`.
///
/// # Errors
///
/// Returns [`InvalidCollection`](UnderbarError::InvalidCollection) if
/// `collection` is neither a sequence nor a mapping.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{Mapping, pluck};
///
/// let people: Vec<Mapping<u32>> = vec![[("age", 30)].into(), [("height", 180)].into()];
/// assert_eq!(pluck(&people, "age"), Ok(vec![Some(30), None]));
/// ```
pub fn pluck<C>(
    collection: &C,
    name: &str,
) -> Result<Vec<Option<<C::Item as Field>::Output>>>
where
    C: Traversable + ?Sized,
    C::Item: Field,
    <C::Item as Field>::Output: Clone,
{
    map(collection, |element, _| element.field(name).cloned())
}

/// Elements that respond to operations looked up by name.
pub trait Methods {
    /// The result type of every method.
    type Output;

    /// Runs the method called `name`, or returns `None` if there is none.
    fn call_method(&self, name: &str) -> Option<Self::Output>;
}

fn string_method(text: &str, name: &str) -> Option<String> {
    match name {
        "to_uppercase" => Some(text.to_uppercase()),
        "to_lowercase" => Some(text.to_lowercase()),
        "trim" => Some(text.trim().to_string()),
        "reverse" => Some(text.chars().rev().collect()),
        _ => None,
    }
}

impl Methods for String {
    type Output = Self;

    fn call_method(&self, name: &str) -> Option<Self> {
        string_method(self, name)
    }
}

impl Methods for &str {
    type Output = String;

    fn call_method(&self, name: &str) -> Option<String> {
        string_method(self, name)
    }
}

impl Methods for Value {
    type Output = Self;

    /// Strings support the string methods; arrays support `"reverse"`.
    fn call_method(&self, name: &str) -> Option<Self> {
        match (self, name) {
            (Self::String(text), _) => string_method(text, name).map(Self::String),
            (Self::Array(elements), "reverse") => {
                Some(Self::Array(elements.iter().rev().cloned().collect()))
            }
            _ => None,
        }
    }
}

/// Applies `function` to every element and collects the results.
///
/// Works for any element type; see [`invoke_method`] for calls by name.
///
/// # Errors
///
/// Returns [`InvalidCollection`](UnderbarError::InvalidCollection) if
/// `collection` is neither a sequence nor a mapping.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::invoke;
///
/// assert_eq!(invoke(&[1, 2, 3], |number: &i32| number * 2), Ok(vec![2, 4, 6]));
/// ```
pub fn invoke<C, R, F>(collection: &C, mut function: F) -> Result<Vec<R>>
where
    C: Traversable + ?Sized,
    F: FnMut(&C::Item) -> R,
{
    map(collection, |element, _| function(element))
}

/// Calls the method `name` on every element and collects the results.
///
/// # Errors
///
/// - [`InvalidCollection`](UnderbarError::InvalidCollection) if `collection`
///   is neither a sequence nor a mapping.
/// - [`UnknownMethod`](UnderbarError::UnknownMethod) if an element does not
///   provide the named method.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::invoke_method;
///
/// let words = vec!["dog".to_string(), "cat".to_string()];
/// assert_eq!(
///     invoke_method(&words, "to_uppercase"),
///     Ok(vec!["DOG".to_string(), "CAT".to_string()])
/// );
/// ```
pub fn invoke_method<C>(
    collection: &C,
    name: &str,
) -> Result<Vec<<C::Item as Methods>::Output>>
where
    C: Traversable + ?Sized,
    C::Item: Methods,
{
    map(collection, |element, _| {
        element
            .call_method(name)
            .ok_or_else(|| UnderbarError::UnknownMethod {
                name: name.to_string(),
            })
    })?
    .into_iter()
    .collect()
}
