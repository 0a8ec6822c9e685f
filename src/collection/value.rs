//! Dynamic, JSON-like values.
//!
//! [`Value`] is for callers whose data shape is only known at run time. It
//! is the one [`Traversable`](super::Traversable) that can refuse to be
//! traversed: only [`Value::Array`] and [`Value::Object`] are collections,
//! every other variant fails with
//! [`InvalidCollection`](crate::UnderbarError::InvalidCollection).
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::{Value, each};
//! use underbar::UnderbarError;
//!
//! let list = Value::from(vec![1, 2, 3]);
//! let mut total = 0.0;
//! each(&list, |value, _, _| {
//!     if let Value::Number(number) = value {
//!         total += number;
//!     }
//! })
//! .unwrap();
//! assert_eq!(total, 6.0);
//!
//! let scalar = Value::from(7);
//! assert_eq!(
//!     each(&scalar, |_, _, _| {}),
//!     Err(UnderbarError::InvalidCollection { found: "number" })
//! );
//! ```

use super::mapping::Mapping;

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// The absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A key-labeled mapping of values.
    Object(Mapping<Value>),
}

impl Value {
    /// Returns the name of this value's kind, as used in error messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Returns `true` for values that are neither arrays nor objects.
    pub const fn is_primitive(&self) -> bool {
        !matches!(self, Self::Array(_) | Self::Object(_))
    }

    /// Returns the elements if this is an array.
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the mapping if this is an object.
    pub const fn as_object(&self) -> Option<&Mapping<Self>> {
        match self {
            Self::Object(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Returns the string slice if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the number if this is a number.
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! value_from_number {
    ($($number:ty),* $(,)?) => {
        $(
            impl From<$number> for Value {
                fn from(value: $number) -> Self {
                    Self::Number(f64::from(value))
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, u8, u16, u32, f32, f64);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<Mapping<Self>> for Value {
    fn from(mapping: Mapping<Self>) -> Self {
        Self::Object(mapping)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self::Array(iterable.into_iter().map(Into::into).collect())
    }
}

/// 2^63, the first `f64` above `i64::MAX`.
#[cfg(feature = "serde")]
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Returns `number` as an `i64` if it is whole and within range.
#[cfg(feature = "serde")]
#[allow(clippy::cast_possible_truncation)]
fn whole_number(number: f64) -> Option<i64> {
    let in_range = (-I64_BOUND..I64_BOUND).contains(&number);
    (in_range && number.fract() == 0.0).then_some(number as i64)
}

// Whole numbers go out as integers so JSON like `{"count":1}` round-trips
// unchanged.
#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Number(number) => match whole_number(*number) {
                Some(integer) => serializer.serialize_i64(integer),
                None => serializer.serialize_f64(*number),
            },
            Self::String(text) => serializer.serialize_str(text),
            Self::Array(elements) => serializer.collect_seq(elements),
            Self::Object(mapping) => serde::Serialize::serialize(mapping, serializer),
        }
    }
}
