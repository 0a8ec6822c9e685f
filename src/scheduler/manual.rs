//! A scheduler driven by an explicit virtual clock.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use super::{Scheduler, Task};

#[derive(Default)]
struct Timeline {
    now: Duration,
    next_sequence: u64,
    // Keyed by (deadline, registration sequence) so ties run in registration order.
    queue: BTreeMap<(Duration, u64), Task>,
}

impl Timeline {
    fn pop_due(&mut self, until: Duration) -> Option<Task> {
        let (&(deadline, _), _) = self.queue.first_key_value()?;
        if deadline > until {
            return None;
        }
        let (_, task) = self.queue.pop_first()?;
        self.now = self.now.max(deadline);
        Some(task)
    }
}

/// A [`Scheduler`] whose time only moves when [`advance`](Self::advance) is called.
///
/// Clones share the same timeline, so a clone handed to a decorator can be
/// driven through the original.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use std::time::Duration;
/// use underbar::scheduler::{ManualScheduler, Scheduler};
///
/// let scheduler = ManualScheduler::new();
/// let order = Rc::new(RefCell::new(Vec::new()));
///
/// for (label, delay) in [("late", 20), ("early", 5)] {
///     let order = Rc::clone(&order);
///     scheduler.schedule(
///         Duration::from_millis(delay),
///         Box::new(move || order.borrow_mut().push(label)),
///     );
/// }
///
/// assert_eq!(scheduler.advance(Duration::from_millis(30)), 2);
/// assert_eq!(*order.borrow(), vec!["early", "late"]);
/// ```
#[derive(Clone, Default)]
pub struct ManualScheduler {
    timeline: Rc<RefCell<Timeline>>,
}

impl ManualScheduler {
    /// Creates a scheduler whose clock reads zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current virtual time.
    pub fn now(&self) -> Duration {
        self.timeline.borrow().now
    }

    /// Returns the number of tasks that have not run yet.
    pub fn pending(&self) -> usize {
        self.timeline.borrow().queue.len()
    }

    /// Moves the clock forward by `elapsed`, running every task that falls due.
    /// The clock saturates at [`Duration::MAX`].
    ///
    /// Tasks run in deadline order. A task scheduled by a running task also
    /// runs in this call if its deadline is within the advanced window.
    /// Returns the number of tasks run.
    pub fn advance(&self, elapsed: Duration) -> usize {
        let until = self.now().saturating_add(elapsed);
        let mut ran = 0;
        loop {
            let next = self.timeline.borrow_mut().pop_due(until);
            let Some(task) = next else { break };
            tracing::trace!(now = ?self.now(), "running scheduled task");
            task();
            ran += 1;
        }
        self.timeline.borrow_mut().now = until;
        ran
    }

    /// Runs tasks until none are left, moving the clock to each deadline.
    ///
    /// Returns the number of tasks run. Tasks that keep rescheduling
    /// themselves make this loop forever.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        loop {
            let next = self.timeline.borrow_mut().pop_due(Duration::MAX);
            let Some(task) = next else { break };
            task();
            ran += 1;
        }
        ran
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut timeline = self.timeline.borrow_mut();
        let deadline = timeline.now.saturating_add(delay);
        let sequence = timeline.next_sequence;
        timeline.next_sequence += 1;
        timeline.queue.insert((deadline, sequence), task);
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timeline = self.timeline.borrow();
        formatter
            .debug_struct("ManualScheduler")
            .field("now", &timeline.now)
            .field("pending", &timeline.queue.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_ties_run_in_registration_order() {
        let scheduler = ManualScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for label in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            scheduler.schedule(
                Duration::from_millis(1),
                Box::new(move || order.borrow_mut().push(label)),
            );
        }
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[rstest]
    fn test_task_scheduled_during_advance_runs_when_due() {
        let scheduler = ManualScheduler::new();
        let count = Rc::new(Cell::new(0));

        let inner_scheduler = scheduler.clone();
        let inner_count = Rc::clone(&count);
        scheduler.schedule(
            Duration::from_millis(5),
            Box::new(move || {
                inner_count.set(inner_count.get() + 1);
                let again = Rc::clone(&inner_count);
                inner_scheduler.schedule(
                    Duration::from_millis(5),
                    Box::new(move || again.set(again.get() + 1)),
                );
            }),
        );

        assert_eq!(scheduler.advance(Duration::from_millis(9)), 1);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
        assert_eq!(count.get(), 2);
        assert_eq!(scheduler.now(), Duration::from_millis(10));
    }

    #[rstest]
    fn test_run_until_idle_moves_clock_to_last_deadline() {
        let scheduler = ManualScheduler::new();
        scheduler.schedule(Duration::from_millis(40), Box::new(|| {}));
        scheduler.schedule(Duration::from_millis(15), Box::new(|| {}));
        assert_eq!(scheduler.run_until_idle(), 2);
        assert_eq!(scheduler.now(), Duration::from_millis(40));
        assert_eq!(scheduler.pending(), 0);
    }

    #[rstest]
    fn test_advance_saturates_at_max() {
        let scheduler = ManualScheduler::new();
        scheduler.schedule(Duration::from_millis(5), Box::new(|| {}));
        scheduler.advance(Duration::from_millis(1));

        assert_eq!(scheduler.advance(Duration::MAX), 1);
        assert_eq!(scheduler.now(), Duration::MAX);
        assert_eq!(scheduler.advance(Duration::from_secs(1)), 0);
        assert_eq!(scheduler.now(), Duration::MAX);
    }
}
