//! Stateful function decorators.
//!
//! Each decorator takes a function and returns a value that owns the
//! function together with its private state. Every application of a
//! decorator creates fresh state; nothing is shared between instances.
//!
//! - [`once`]: runs the function on the first call and replays that result.
//! - [`memoize`]: caches results by exact, ordered argument list.
//! - [`throttle`]: at most one execution per window, with a trailing call.
//! - [`delay`]: runs a function once after a wait, with bound arguments.
//!
//! Multiple arguments are passed as a tuple. The decorated values are
//! single-threaded; none of them is `Sync`, and [`Throttled`] is not `Send`.
//!
//! # Examples
//!
//! ```rust
//! use underbar::decorator::{memoize, once};
//!
//! let setup = once(|label: &str| label.len());
//! assert_eq!(setup.call("first"), 5);
//! assert_eq!(setup.call("ignored"), 5);
//!
//! let add = memoize(|(left, right): (u32, u32)| left + right);
//! assert_eq!(add.call((2, 3)), Ok(5));
//! assert_eq!(add.len(), 1);
//! ```

mod delay;
mod memoize;
mod once;
mod throttle;

pub use delay::delay;
pub use memoize::{ArgumentList, Memoized, Primitive, memoize};
pub use once::{Once, OnceState, once};
pub use throttle::{Throttled, throttle};

static_assertions::assert_not_impl_any!(Once<i32, i32, fn(i32) -> i32>: Sync);
static_assertions::assert_not_impl_any!(Memoized<i32, i32, fn(i32) -> i32>: Sync);
static_assertions::assert_not_impl_any!(
    Throttled<i32, i32, fn(i32) -> i32, crate::scheduler::ManualScheduler>: Send, Sync
);
