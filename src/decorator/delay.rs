//! One-shot deferred calls.

use std::time::Duration;

use crate::scheduler::Scheduler;

/// Schedules `function` to run once with `arguments` after `wait` has elapsed.
///
/// The arguments are bound now and moved into the scheduled task. The call
/// cannot be cancelled once registered.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use std::time::Duration;
/// use underbar::decorator::delay;
/// use underbar::scheduler::ManualScheduler;
///
/// let scheduler = ManualScheduler::new();
/// let log = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&log);
///
/// delay(
///     move |(left, right): (i32, i32)| sink.borrow_mut().push(left + right),
///     Duration::from_millis(50),
///     (1, 2),
///     &scheduler,
/// );
/// assert!(log.borrow().is_empty());
///
/// scheduler.advance(Duration::from_millis(50));
/// assert_eq!(*log.borrow(), vec![3]);
/// ```
pub fn delay<A, F, S>(function: F, wait: Duration, arguments: A, scheduler: &S)
where
    A: 'static,
    F: FnOnce(A) + 'static,
    S: Scheduler + ?Sized,
{
    tracing::trace!(?wait, "delay: call scheduled");
    scheduler.schedule(wait, Box::new(move || function(arguments)));
}
