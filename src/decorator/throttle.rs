//! Rate limiting with a trailing call.
//!
//! A [`Throttled`] function runs its wrapped function at most once per window:
//!
//! 1. A call while the window is closed runs the function immediately and
//!    opens the window by scheduling an expiry timer.
//! 2. Calls while the window is open are coalesced. Only the most recent
//!    arguments are kept.
//! 3. When the timer fires the window closes. If a call was coalesced, it runs
//!    now with the kept arguments, which opens a fresh window.
//!
//! Every call returns the most recently computed result, never the result of
//! a trailing call that has not run yet.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use underbar::decorator::throttle;
//! use underbar::scheduler::ManualScheduler;
//!
//! let scheduler = ManualScheduler::new();
//! let square = throttle(|value: i32| value * value, 100.0, scheduler.clone())?;
//!
//! assert_eq!(square.call(2), 4);
//! assert_eq!(square.call(3), 4); // coalesced, returns the last result
//!
//! scheduler.advance(Duration::from_millis(100));
//! assert_eq!(square.last_result(), Some(9));
//! # Ok::<(), underbar::UnderbarError>(())
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::error::{Result, UnderbarError};
use crate::scheduler::Scheduler;

struct ThrottleState<A, R> {
    result: Option<R>,
    pending: Option<A>,
    window_open: bool,
}

struct Shared<A, R, F, S> {
    function: F,
    window: Duration,
    scheduler: S,
    state: RefCell<ThrottleState<A, R>>,
}

impl<A, R, F, S> Shared<A, R, F, S>
where
    A: 'static,
    R: Clone + 'static,
    F: Fn(A) -> R + 'static,
    S: Scheduler + 'static,
{
    fn execute(self: &Rc<Self>, arguments: A) -> R {
        // The timer goes in first so the window still closes if `function` panics.
        self.state.borrow_mut().window_open = true;
        let timer = Rc::clone(self);
        self.scheduler
            .schedule(self.window, Box::new(move || timer.expire()));

        let result = (self.function)(arguments);
        self.state.borrow_mut().result = Some(result.clone());
        result
    }

    fn expire(self: &Rc<Self>) {
        let pending = {
            let mut state = self.state.borrow_mut();
            state.window_open = false;
            state.pending.take()
        };
        match pending {
            Some(arguments) => {
                tracing::trace!(window = ?self.window, "throttle: trailing call");
                self.execute(arguments);
            }
            None => tracing::trace!("throttle: window closed"),
        }
    }
}

/// A function limited to one execution per window.
///
/// Cloning a `Throttled` yields another handle to the same window and state.
/// A scheduled expiry keeps the state alive, so a coalesced call still runs
/// after every handle has been dropped.
///
/// # Thread Safety
///
/// This type is NOT thread-safe. The state is shared through `Rc`.
pub struct Throttled<A, R, F, S> {
    shared: Rc<Shared<A, R, F, S>>,
}

/// Wraps `function` so that it runs at most once every `window_ms`
/// milliseconds, with one trailing call per window.
///
/// # Errors
///
/// Returns [`UnderbarError::InvalidWindow`] if `window_ms` is negative,
/// `NaN`, infinite, or too large for a [`Duration`].
pub fn throttle<A, R, F, S>(
    function: F,
    window_ms: f64,
    scheduler: S,
) -> Result<Throttled<A, R, F, S>>
where
    A: 'static,
    R: Clone + 'static,
    F: Fn(A) -> R + 'static,
    S: Scheduler + 'static,
{
    if !window_ms.is_finite() || window_ms < 0.0 {
        return Err(UnderbarError::InvalidWindow { window_ms });
    }
    let window = Duration::try_from_secs_f64(window_ms / 1000.0)
        .map_err(|_| UnderbarError::InvalidWindow { window_ms })?;
    Ok(Throttled::new(function, window, scheduler))
}

impl<A, R, F, S> Throttled<A, R, F, S>
where
    A: 'static,
    R: Clone + 'static,
    F: Fn(A) -> R + 'static,
    S: Scheduler + 'static,
{
    /// Creates a throttled function from an already validated window.
    pub fn new(function: F, window: Duration, scheduler: S) -> Self {
        tracing::debug!(?window, "throttle: created");
        Self {
            shared: Rc::new(Shared {
                function,
                window,
                scheduler,
                state: RefCell::new(ThrottleState {
                    result: None,
                    pending: None,
                    window_open: false,
                }),
            }),
        }
    }

    /// Runs the wrapped function now if the window is closed, otherwise
    /// records `arguments` for the trailing call.
    ///
    /// Returns the most recently computed result.
    ///
    /// # Panics
    ///
    /// - If the wrapped function panics. The window stays open until its
    ///   timer fires.
    /// - If the window is open and no result has been computed yet. This
    ///   happens when the wrapped function calls back into this throttle
    ///   during its first run, or when that first run panicked. The
    ///   arguments are not kept for a trailing call in that case.
    pub fn call(&self, arguments: A) -> R {
        {
            let mut state = self.shared.state.borrow_mut();
            if state.window_open {
                let Some(result) = state.result.clone() else {
                    panic!("Throttled function has no result yet: its first run panicked or is still running");
                };
                let replaced = state.pending.replace(arguments).is_some();
                tracing::trace!(replaced, "throttle: call coalesced");
                return result;
            }
        }
        tracing::trace!("throttle: leading call");
        self.shared.execute(arguments)
    }
}

impl<A, R, F, S> Throttled<A, R, F, S> {
    /// Returns `true` while an expiry timer is outstanding.
    pub fn is_window_open(&self) -> bool {
        self.shared.state.borrow().window_open
    }

    /// Returns `true` if a coalesced call is waiting for the window to close.
    pub fn has_pending_call(&self) -> bool {
        self.shared.state.borrow().pending.is_some()
    }

    /// Returns the most recently computed result, if any.
    pub fn last_result(&self) -> Option<R>
    where
        R: Clone,
    {
        self.shared.state.borrow().result.clone()
    }

    /// Returns the window length.
    pub fn window(&self) -> Duration {
        self.shared.window
    }
}

impl<A, R, F, S> Clone for Throttled<A, R, F, S> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<A, R, F, S> fmt::Debug for Throttled<A, R, F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.borrow();
        formatter
            .debug_struct("Throttled")
            .field("window", &self.shared.window)
            .field("window_open", &state.window_open)
            .field("pending", &state.pending.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use rstest::rstest;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    fn counted(
        scheduler: &ManualScheduler,
        calls: &Rc<Cell<usize>>,
    ) -> Throttled<i32, i32, impl Fn(i32) -> i32 + 'static, ManualScheduler> {
        let calls = Rc::clone(calls);
        throttle(
            move |value: i32| {
                calls.set(calls.get() + 1);
                value
            },
            100.0,
            scheduler.clone(),
        )
        .unwrap()
    }

    #[rstest]
    fn test_throttle_leading_then_trailing() {
        let scheduler = ManualScheduler::new();
        let calls = Rc::new(Cell::new(0));
        let throttled = counted(&scheduler, &calls);

        assert_eq!(throttled.call(1), 1);
        assert_eq!(throttled.call(2), 1);
        assert_eq!(calls.get(), 1);

        scheduler.advance(Duration::from_millis(99));
        assert_eq!(calls.get(), 1);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(calls.get(), 2);
        assert_eq!(throttled.last_result(), Some(2));
    }

    #[rstest]
    fn test_throttle_keeps_most_recent_arguments() {
        let scheduler = ManualScheduler::new();
        let calls = Rc::new(Cell::new(0));
        let throttled = counted(&scheduler, &calls);

        throttled.call(1);
        throttled.call(2);
        throttled.call(3);
        throttled.call(4);
        scheduler.advance(Duration::from_millis(100));

        assert_eq!(calls.get(), 2);
        assert_eq!(throttled.last_result(), Some(4));
    }

    #[rstest]
    fn test_throttle_trailing_call_restarts_window() {
        let scheduler = ManualScheduler::new();
        let calls = Rc::new(Cell::new(0));
        let throttled = counted(&scheduler, &calls);

        throttled.call(1);
        throttled.call(2);
        scheduler.advance(Duration::from_millis(100));
        assert!(throttled.is_window_open());

        assert_eq!(throttled.call(3), 2);
        assert_eq!(calls.get(), 2);
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(calls.get(), 3);
        assert_eq!(throttled.last_result(), Some(3));
    }

    #[rstest]
    fn test_throttle_idle_window_closes_without_call() {
        let scheduler = ManualScheduler::new();
        let calls = Rc::new(Cell::new(0));
        let throttled = counted(&scheduler, &calls);

        throttled.call(1);
        scheduler.advance(Duration::from_millis(100));
        assert!(!throttled.is_window_open());
        assert_eq!(calls.get(), 1);

        assert_eq!(throttled.call(5), 5);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn test_throttle_trailing_call_survives_drop() {
        let scheduler = ManualScheduler::new();
        let calls = Rc::new(Cell::new(0));
        {
            let throttled = counted(&scheduler, &calls);
            throttled.call(1);
            throttled.call(2);
        }
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(1e300)]
    fn test_throttle_rejects_invalid_window(#[case] window_ms: f64) {
        let result = throttle(|(): ()| (), window_ms, ManualScheduler::new());
        assert!(matches!(
            result,
            Err(UnderbarError::InvalidWindow { .. })
        ));
    }

    #[rstest]
    fn test_throttle_fractional_window() {
        let throttled = throttle(|(): ()| (), 0.5, ManualScheduler::new()).unwrap();
        assert_eq!(throttled.window(), Duration::from_micros(500));
    }

    #[rstest]
    fn test_throttle_recovers_after_leading_call_panics() {
        let scheduler = ManualScheduler::new();
        let throttled = throttle(
            |value: i32| {
                assert!(value >= 0, "negative input");
                value
            },
            100.0,
            scheduler.clone(),
        )
        .unwrap();

        assert!(catch_unwind(AssertUnwindSafe(|| throttled.call(-1))).is_err());
        assert!(throttled.is_window_open());

        let during_window = catch_unwind(AssertUnwindSafe(|| throttled.call(2)));
        assert!(during_window.is_err());
        assert!(!throttled.has_pending_call());

        scheduler.advance(Duration::from_millis(100));
        assert!(!throttled.is_window_open());
        assert_eq!(throttled.call(3), 3);
        assert_eq!(throttled.last_result(), Some(3));
    }

    fn window_summary<A, R, F, S>(throttled: &Throttled<A, R, F, S>) -> (bool, bool, Duration) {
        (
            throttled.is_window_open(),
            throttled.has_pending_call(),
            throttled.window(),
        )
    }

    #[rstest]
    fn test_throttle_accessors_need_no_bounds() {
        let scheduler = ManualScheduler::new();
        let throttled = throttle(|value: i32| value, 10.0, scheduler.clone()).unwrap();
        assert_eq!(
            window_summary(&throttled),
            (false, false, Duration::from_millis(10))
        );

        throttled.call(1);
        throttled.call(2);
        assert_eq!(
            window_summary(&throttled),
            (true, true, Duration::from_millis(10))
        );
    }
}
