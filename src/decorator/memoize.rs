//! Argument-list memoization.
//!
//! [`Memoized`] keeps an ordered, unbounded cache of `(arguments, result)`
//! entries. A call whose argument list is element-wise equal, in order, to a
//! cached one returns the cached result without running the function again.
//! Lookup is a linear scan, O(n·k) for `n` entries of `k` arguments, which
//! suits expensive pure functions called with a modest number of distinct
//! argument lists.
//!
//! Only primitive, strictly comparable arguments are accepted. Argument
//! lists implement [`ArgumentList`]; a [`Value`] argument that is an array,
//! an object or `NaN` is rejected with
//! [`NonComparableArgument`](UnderbarError::NonComparableArgument).
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use underbar::decorator::memoize;
//!
//! let calls = Cell::new(0);
//! let subtract = memoize(|(left, right): (i64, i64)| {
//!     calls.set(calls.get() + 1);
//!     left - right
//! });
//!
//! assert_eq!(subtract.call((1, 2)), Ok(-1));
//! assert_eq!(subtract.call((1, 2)), Ok(-1));
//! assert_eq!(calls.get(), 1);
//!
//! assert_eq!(subtract.call((2, 1)), Ok(1));
//! assert_eq!(calls.get(), 2);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;

#[cfg(feature = "collection")]
use crate::collection::Value;
use crate::error::{Result, UnderbarError};

/// A single argument that may take part in a memoized argument list.
pub trait Primitive: Clone + PartialEq {
    /// Returns the kind name if this value cannot be compared by value.
    fn non_comparable_kind(&self) -> Option<&'static str> {
        None
    }
}

/// An argument list that can key a memoization cache.
///
/// Implemented for every [`Primitive`] (a single argument), for tuples of up
/// to six primitives, for `Vec` and arrays of primitives, and for `()`.
pub trait ArgumentList: Clone + PartialEq {
    /// Checks that every argument can be compared by value.
    ///
    /// # Errors
    ///
    /// Returns [`UnderbarError::NonComparableArgument`] naming the first
    /// offending position.
    fn ensure_comparable(&self) -> Result<()>;
}

fn check(position: usize, argument: &impl Primitive) -> Result<()> {
    match argument.non_comparable_kind() {
        Some(found) => Err(UnderbarError::NonComparableArgument { position, found }),
        None => Ok(()),
    }
}

macro_rules! primitive_argument {
    ($($primitive:ty),* $(,)?) => {
        $(
            impl Primitive for $primitive {}

            impl ArgumentList for $primitive {
                fn ensure_comparable(&self) -> Result<()> {
                    check(0, self)
                }
            }
        )*
    };
}

primitive_argument!(
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    String,
    &'static str,
);

macro_rules! float_argument {
    ($($float:ty),* $(,)?) => {
        $(
            impl Primitive for $float {
                fn non_comparable_kind(&self) -> Option<&'static str> {
                    self.is_nan().then_some("NaN")
                }
            }

            impl ArgumentList for $float {
                fn ensure_comparable(&self) -> Result<()> {
                    check(0, self)
                }
            }
        )*
    };
}

float_argument!(f32, f64);

#[cfg(feature = "collection")]
impl Primitive for Value {
    fn non_comparable_kind(&self) -> Option<&'static str> {
        match self {
            Self::Array(_) | Self::Object(_) => Some(self.kind_name()),
            Self::Number(number) if number.is_nan() => Some("NaN"),
            _ => None,
        }
    }
}

#[cfg(feature = "collection")]
impl ArgumentList for Value {
    fn ensure_comparable(&self) -> Result<()> {
        check(0, self)
    }
}

impl ArgumentList for () {
    fn ensure_comparable(&self) -> Result<()> {
        Ok(())
    }
}

macro_rules! tuple_argument_list {
    ($(($($name:ident : $index:tt),+)),* $(,)?) => {
        $(
            impl<$($name: Primitive),+> ArgumentList for ($($name,)+) {
                fn ensure_comparable(&self) -> Result<()> {
                    $(check($index, &self.$index)?;)+
                    Ok(())
                }
            }
        )*
    };
}

tuple_argument_list!(
    (A: 0),
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
    (A: 0, B: 1, C: 2, D: 3, E: 4),
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5),
);

impl<T: Primitive> ArgumentList for Vec<T> {
    fn ensure_comparable(&self) -> Result<()> {
        self.iter()
            .enumerate()
            .try_for_each(|(position, argument)| check(position, argument))
    }
}

impl<T: Primitive, const N: usize> ArgumentList for [T; N] {
    fn ensure_comparable(&self) -> Result<()> {
        self.iter()
            .enumerate()
            .try_for_each(|(position, argument)| check(position, argument))
    }
}

struct CacheEntry<A, R> {
    arguments: A,
    result: R,
}

/// A function whose results are cached by argument list.
///
/// The cache is created with the `Memoized` value, only ever grows, and is
/// dropped with it.
///
/// # Thread Safety
///
/// This type is NOT thread-safe. The cache lives in a `RefCell`.
pub struct Memoized<A, R, F> {
    function: F,
    cache: RefCell<Vec<CacheEntry<A, R>>>,
    signature: PhantomData<fn(A) -> R>,
}

/// Wraps `function` so that repeated argument lists are answered from a cache.
pub fn memoize<A, R, F>(function: F) -> Memoized<A, R, F>
where
    A: ArgumentList,
    R: Clone,
    F: Fn(A) -> R,
{
    tracing::debug!("memoize: cache created");
    Memoized {
        function,
        cache: RefCell::new(Vec::new()),
        signature: PhantomData,
    }
}

impl<A, R, F> Memoized<A, R, F>
where
    A: ArgumentList,
    R: Clone,
    F: Fn(A) -> R,
{
    /// Returns the cached result for `arguments`, computing and caching it on
    /// first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`UnderbarError::NonComparableArgument`] if an argument cannot
    /// be compared by value. The wrapped function is not called in that case.
    pub fn call(&self, arguments: A) -> Result<R> {
        arguments.ensure_comparable()?;

        if let Some(result) = self.lookup(&arguments) {
            tracing::trace!(entries = self.len(), "memoize: cache hit");
            return Ok(result);
        }

        let result = (self.function)(arguments.clone());
        let mut cache = self.cache.borrow_mut();
        cache.push(CacheEntry {
            arguments,
            result: result.clone(),
        });
        tracing::trace!(entries = cache.len(), "memoize: cache miss");
        Ok(result)
    }

    fn lookup(&self, arguments: &A) -> Option<R> {
        self.cache
            .borrow()
            .iter()
            .find(|entry| entry.arguments == *arguments)
            .map(|entry| entry.result.clone())
    }
}

impl<A, R, F> Memoized<A, R, F> {
    /// Returns the number of cached argument lists.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
}

impl<A, R, F> fmt::Debug for Memoized<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("entries", &self.len())
            .finish_non_exhaustive()
    }
}
