//! Deferred execution.
//!
//! [`Scheduler`] is the host facility that [`throttle`](crate::decorator::throttle)
//! and [`delay`](crate::decorator::delay) use to run work later on the same
//! logical thread. Registration never blocks, and a scheduled task cannot be
//! cancelled.
//!
//! Two implementations are provided:
//!
//! - [`ManualScheduler`]: a virtual clock advanced explicitly by the caller.
//!   Deterministic, suited to tests and to hosts that drive their own loop.
//! - `TokioScheduler` (feature `async`): sleeps on the tokio timer and runs
//!   tasks with `spawn_local`, so it must be used inside a
//!   `tokio::task::LocalSet`.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::Duration;
//! use underbar::scheduler::{ManualScheduler, Scheduler};
//!
//! let scheduler = ManualScheduler::new();
//! let fired = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&fired);
//! scheduler.schedule(Duration::from_millis(10), Box::new(move || flag.set(true)));
//!
//! scheduler.advance(Duration::from_millis(9));
//! assert!(!fired.get());
//! scheduler.advance(Duration::from_millis(1));
//! assert!(fired.get());
//! ```

mod manual;
#[cfg(feature = "async")]
mod tokio_timer;

use std::rc::Rc;
use std::time::Duration;

pub use manual::ManualScheduler;
#[cfg(feature = "async")]
pub use tokio_timer::TokioScheduler;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce() + 'static>;

/// A facility that runs tasks after a delay, on the caller's logical thread.
///
/// A task runs strictly after the call that scheduled it returns. Tasks with
/// the same deadline run in registration order.
pub trait Scheduler {
    /// Registers `task` to run once `delay` has elapsed.
    fn schedule(&self, delay: Duration, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
    fn schedule(&self, delay: Duration, task: Task) {
        (**self).schedule(delay, task);
    }
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn schedule(&self, delay: Duration, task: Task) {
        (**self).schedule(delay, task);
    }
}
