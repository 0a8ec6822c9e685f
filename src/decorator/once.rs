//! One-time call gating.
//!
//! [`Once`] wraps an `FnOnce` and runs it on the first call only. The guard
//! and the stored result are owned by the `Once` value itself, so every call
//! to [`once`] creates an independent gate.
//!
//! # Examples
//!
//! ```rust
//! use underbar::decorator::once;
//!
//! let initialize = once(|name: &str| format!("initialized by {name}"));
//!
//! assert_eq!(initialize.call("first"), "initialized by first");
//! assert_eq!(initialize.call("second"), "initialized by first");
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;
use std::marker::PhantomData;

/// The internal state of a [`Once`] gate.
#[derive(Debug)]
pub enum OnceState<F, R> {
    /// The function has not been called yet.
    Pending(F),
    /// The function has run; contains its result.
    Fired(R),
    /// The function panicked, or the gate was re-entered while it was running.
    Poisoned,
}

/// A function that runs at most once and then replays its first result.
///
/// # Type Parameters
///
/// * `A` - The argument type (use a tuple for several arguments)
/// * `R` - The result type
/// * `F` - The wrapped function
///
/// # Thread Safety
///
/// This type is NOT thread-safe. The guard lives in a `RefCell`.
pub struct Once<A, R, F> {
    state: RefCell<OnceState<F, R>>,
    argument: PhantomData<fn(A)>,
}

/// Wraps `function` so that it runs only on the first call.
pub fn once<A, R, F>(function: F) -> Once<A, R, F>
where
    F: FnOnce(A) -> R,
{
    tracing::debug!("once: gate created");
    Once {
        state: RefCell::new(OnceState::Pending(function)),
        argument: PhantomData,
    }
}

impl<A, R: Clone, F: FnOnce(A) -> R> Once<A, R, F> {
    /// Calls the wrapped function on the first invocation and returns its
    /// result; later invocations ignore `arguments` and return that same result.
    ///
    /// # Panics
    ///
    /// - If the wrapped function panics, the gate becomes poisoned and this
    ///   call, and every later one, panics.
    /// - If the wrapped function calls back into this same gate.
    pub fn call(&self, arguments: A) -> R {
        let function = {
            let mut state = self.state.borrow_mut();
            match &*state {
                OnceState::Fired(result) => return result.clone(),
                OnceState::Poisoned => panic!("Once instance has been poisoned"),
                OnceState::Pending(_) => {}
            }
            // Poisoned until the function returns, so a panic leaves it poisoned.
            let OnceState::Pending(function) =
                std::mem::replace(&mut *state, OnceState::Poisoned)
            else {
                unreachable!()
            };
            function
        };

        let result = function(arguments);
        tracing::trace!("once: wrapped function fired");
        *self.state.borrow_mut() = OnceState::Fired(result.clone());
        result
    }
}

impl<A, R, F> Once<A, R, F> {
    /// Returns `true` once the wrapped function has completed.
    #[inline]
    pub fn has_fired(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Fired(_))
    }

    /// Returns `true` if the wrapped function panicked.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Poisoned)
    }

    /// Returns the stored result without calling anything.
    pub fn result(&self) -> Option<Ref<'_, R>> {
        Ref::filter_map(self.state.borrow(), |state| match state {
            OnceState::Fired(result) => Some(result),
            _ => None,
        })
        .ok()
    }
}

impl<A, R: fmt::Debug, F> fmt::Debug for Once<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        match &*state {
            OnceState::Fired(result) => formatter.debug_tuple("Once").field(result).finish(),
            OnceState::Pending(_) => formatter.debug_tuple("Once").field(&"<pending>").finish(),
            OnceState::Poisoned => formatter.debug_tuple("Once").field(&"<poisoned>").finish(),
        }
    }
}
