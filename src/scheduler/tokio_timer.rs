//! A scheduler backed by the tokio timer.

use std::time::Duration;

use super::{Scheduler, Task};

/// A [`Scheduler`] that sleeps on `tokio::time` and runs tasks with
/// `tokio::task::spawn_local`.
///
/// Tasks are not `Send`, so they run on the current thread's
/// [`LocalSet`](tokio::task::LocalSet).
///
/// # Panics
///
/// [`schedule`](Scheduler::schedule) panics when called outside a `LocalSet`.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
/// use underbar::scheduler::{Scheduler, TokioScheduler};
///
/// let runtime = tokio::runtime::Builder::new_current_thread()
///     .enable_time()
///     .build()
///     .unwrap();
/// let local = tokio::task::LocalSet::new();
///
/// let fired = Rc::new(Cell::new(false));
/// let flag = Rc::clone(&fired);
/// local.block_on(&runtime, async move {
///     TokioScheduler.schedule(Duration::from_millis(1), Box::new(move || flag.set(true)));
///     tokio::time::sleep(Duration::from_millis(5)).await;
/// });
/// assert!(fired.get());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            tracing::trace!(?delay, "running scheduled task");
            task();
        });
    }
}
