//! Virtual-time task scheduler.

use std::collections::BTreeMap;
use std::time::Duration;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Handle for a scheduled task.
///
/// Handles are never reused within one scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskHandle(pub u64);

impl TaskHandle {
    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// A task popped from the queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fired<A> {
    /// Handle the task was scheduled under.
    pub handle: TaskHandle,
    /// Virtual time the task was due.
    pub due: Duration,
    /// The scheduled payload.
    pub action: A,
}

#[derive(Clone, Debug)]
struct Task<A> {
    handle: TaskHandle,
    period: Option<Duration>,
    action: A,
}

/// Owner of cancellable one-shot and periodic tasks on a virtual clock.
///
/// Tasks are ordered by `(due, handle)`, so tasks due at the same instant
/// fire in the order they were first scheduled. Nothing runs on its own:
/// the caller drains due tasks with [`pop_due`](Self::pop_due) and handles
/// each one before asking for the next, so a task cancelled while handling
/// an earlier one never comes out.
#[derive(Clone, Debug)]
pub struct Scheduler<A> {
    now: Duration,
    next_handle: u64,
    queue: BTreeMap<(Duration, TaskHandle), Task<A>>,
    due_of: FxHashMap<TaskHandle, Duration>,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Scheduler<A> {
    /// Create an empty scheduler at time zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_handle: 0,
            queue: BTreeMap::new(),
            due_of: FxHashMap::default(),
        }
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of live tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Whether `handle` is still waiting to fire.
    #[must_use]
    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.due_of.contains_key(&handle)
    }

    /// Due time of the earliest task.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Run `action` once, `delay` from now. Due times saturate at
    /// `Duration::MAX`.
    pub fn schedule(&mut self, delay: Duration, action: A) -> TaskHandle {
        self.insert(self.now.saturating_add(delay), None, action)
    }

    /// Run `action` every `period`, first at `now + period`.
    ///
    /// A zero period is raised to one nanosecond so the queue always makes
    /// progress.
    pub fn schedule_repeating(&mut self, period: Duration, action: A) -> TaskHandle {
        let period = period.max(Duration::from_nanos(1));
        self.insert(self.now.saturating_add(period), Some(period), action)
    }

    fn insert(&mut self, due: Duration, period: Option<Duration>, action: A) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.queue.insert((due, handle), Task { handle, period, action });
        self.due_of.insert(handle, due);
        trace!(%handle, ?due, ?period, "task scheduled");
        handle
    }

    /// Cancel one task. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        match self.due_of.remove(&handle) {
            Some(due) => {
                self.queue.remove(&(due, handle));
                trace!(%handle, "task cancelled");
                true
            }
            None => false,
        }
    }

    /// Cancel every task. Returns how many were live.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.queue.len();
        self.queue.clear();
        self.due_of.clear();
        if count > 0 {
            trace!(count, "all tasks cancelled");
        }
        count
    }

    /// Move the clock forward to `until` without firing anything.
    ///
    /// The clock never moves backwards.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

impl<A: Clone> Scheduler<A> {
    /// Pop the earliest task due at or before `until`.
    ///
    /// The clock moves to the task's due time. A periodic task is re-armed at
    /// `due + period` under the same handle, so its cadence does not drift
    /// with how finely the caller slices time. A periodic task whose next due
    /// time would overflow fires one last time and is dropped.
    pub fn pop_due(&mut self, until: Duration) -> Option<Fired<A>> {
        let (&(due, handle), _) = self.queue.first_key_value()?;
        if due > until {
            return None;
        }
        let task = self.queue.remove(&(due, handle))?;
        self.due_of.remove(&handle);
        self.now = self.now.max(due);

        if let Some(next) = task.period.and_then(|period| due.checked_add(period)) {
            self.queue.insert(
                (next, handle),
                Task {
                    handle,
                    period: task.period,
                    action: task.action.clone(),
                },
            );
            self.due_of.insert(handle, next);
        }

        Some(Fired {
            handle: task.handle,
            due,
            action: task.action,
        })
    }
}
