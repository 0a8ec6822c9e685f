//! Generic operations over heterogeneous collections.
//!
//! A collection is either an ordered sequence or a key-labeled mapping, and
//! every operation here accepts both without the caller saying which one is
//! in use. The operations form a strict chain:
//!
//! - **Iterator**: [`each`] visits every `(value, key)` pair in order.
//! - **Reducer**: [`reduce`] and [`fold`] thread an accumulator through the
//!   values.
//! - **Predicate combinators**: [`every`] and [`some`] are folds whose boolean
//!   accumulator short-circuits the predicate.
//!
//! The remaining helpers ([`filter`], [`pluck`], [`uniq`], [`zip`], ...) are
//! thin layers over that chain.
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::{Mapping, every, fold, some};
//!
//! let scores: Mapping<u32> = [("ana", 71), ("ben", 58), ("cy", 90)].into();
//!
//! let total = fold(&scores, 0, |total, score, _| total + score).unwrap();
//! assert_eq!(total, 219);
//!
//! assert_eq!(every(&scores, |score, _| *score >= 50), Ok(true));
//! assert_eq!(some(&scores, |score, _| *score > 85), Ok(true));
//! ```
//!
//! # Laws
//!
//! - `each(sequence, f)` calls `f` exactly `len` times with indices `0..len`.
//! - `reduce([x], f, None) == x` without calling `f`.
//! - `some(c, p) == !every(c, |x, i| !p(x, i))`.

mod combinators;
mod iterate;
mod mapping;
mod object;
mod predicate;
mod reduce;
mod slice;
mod traversable;
mod truthy;
mod value;

pub use combinators::{
    Nested, difference, flatten, flatten_values, intersection, sort_by, uniq, zip,
};
pub use iterate::{each, filter, find, identity, index_of, map, reject};
pub use mapping::{Iter as MappingIter, Mapping};
pub use object::{Field, Methods, defaults, extend, invoke, invoke_method, pluck};
pub use predicate::{every, every_truthy, some, some_truthy};
pub use reduce::{contains, fold, reduce};
pub use slice::{first, first_n, last, last_n};
pub use traversable::{Collection, Key, Pairs, Traversable};
pub use truthy::Truthy;
pub use value::Value;
