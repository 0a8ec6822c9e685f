//! Error types shared by every module of the crate.
//!
//! All fallible operations surface their failure synchronously to the
//! immediate caller. Nothing is retried or swallowed internally, so an
//! operation either returns a fully computed result or one of the
//! [`UnderbarError`] kinds below.

use std::fmt;

/// Errors raised by collection operations and function decorators.
///
/// # Examples
///
/// ```rust
/// use underbar::UnderbarError;
///
/// let error = UnderbarError::EmptyReductionWithoutSeed;
/// assert_eq!(
///     format!("{error}"),
///     "reduce: empty collection and no seed value was given"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum UnderbarError {
    /// The argument is neither an ordered sequence nor a mapping.
    InvalidCollection {
        /// Name of the value kind that was received instead.
        found: &'static str,
    },
    /// `reduce` was called on an empty collection without a seed.
    EmptyReductionWithoutSeed,
    /// `memoize` was invoked with an argument that cannot be compared by value.
    NonComparableArgument {
        /// Zero-based position of the offending argument in the argument list.
        position: usize,
        /// Name of the value kind that was received.
        found: &'static str,
    },
    /// `throttle` was given a negative or non-finite window.
    InvalidWindow {
        /// The rejected window length, in milliseconds.
        window_ms: f64,
    },
    /// `invoke` named a method the element does not provide.
    UnknownMethod {
        /// The method name that could not be resolved.
        name: String,
    },
}

impl fmt::Display for UnderbarError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCollection { found } => write!(
                formatter,
                "expected a sequence or a mapping, found {found}"
            ),
            Self::EmptyReductionWithoutSeed => write!(
                formatter,
                "reduce: empty collection and no seed value was given"
            ),
            Self::NonComparableArgument { position, found } => write!(
                formatter,
                "memoize: argument {position} ({found}) cannot be compared by value"
            ),
            Self::InvalidWindow { window_ms } => write!(
                formatter,
                "throttle: window must be a finite, non-negative number of milliseconds, got {window_ms}"
            ),
            Self::UnknownMethod { name } => {
                write!(formatter, "invoke: no method named `{name}`")
            }
        }
    }
}

impl std::error::Error for UnderbarError {}

/// Shorthand for results whose error type is [`UnderbarError`].
pub type Result<T> = std::result::Result<T, UnderbarError>;
