//! # underbar
//!
//! Generic operations over heterogeneous collections and stateful function
//! decorators.
//!
//! ## Overview
//!
//! - **Collections**: `each`, `reduce`, `every`, `some` and friends, written
//!   once against ordered sequences and key-labeled mappings alike
//! - **Decorators**: `once`, `memoize`, `throttle` and `delay`, each owning
//!   its private state
//! - **Scheduling**: the deferred-execution seam used by `throttle` and
//!   `delay`, with a deterministic virtual clock and a tokio-backed timer
//! - **Permutations**: Fisher-Yates `shuffle`
//!
//! ## Feature Flags
//!
//! - `collection`: Collection operations, `Value` and `Mapping`
//! - `random`: `shuffle` (pulls in `rand`)
//! - `decorator`: Decorators and the `scheduler` module
//! - `async`: `TokioScheduler` (pulls in `tokio`)
//! - `serde`: `Serialize`/`Deserialize` for `Value` and `Mapping`
//! - `full`: Enable all features
//!
//! The default set is `collection`, `random` and `decorator`.
//!
//! ## Example
//!
//! ```rust
//! use underbar::prelude::*;
//!
//! let evens = every(&[2, 4, 6], |value, _| value % 2 == 0)?;
//! assert!(evens);
//!
//! let total = reduce(&vec![1, 2, 3], |sum, value, _| sum + value, Some(0))?;
//! assert_eq!(total, 6);
//!
//! let greet = once(|name: &str| format!("hello, {name}"));
//! assert_eq!(greet.call("ana"), "hello, ana");
//! assert_eq!(greet.call("ben"), "hello, ana");
//! # Ok::<(), UnderbarError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the error type and every enabled module.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, UnderbarError};

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "random")]
    pub use crate::random::*;

    #[cfg(feature = "decorator")]
    pub use crate::decorator::*;

    #[cfg(feature = "decorator")]
    pub use crate::scheduler::*;
}

mod error;

pub use error::{Result, UnderbarError};

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "random")]
pub mod random;

#[cfg(feature = "decorator")]
pub mod decorator;

#[cfg(feature = "decorator")]
pub mod scheduler;
