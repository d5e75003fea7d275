//! Cancellable deferred tasks on a virtual clock.
//!
//! The scheduler never looks at wall time. Whoever owns it moves the clock
//! forward with `advance_to`, and every task due by then is handed back in
//! due order (ties broken by scheduling order). Cancelled tasks are removed
//! immediately, so a cancelled handle can never fire.

use std::time::Duration;

/// Handle to a scheduled task, used to cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

impl TaskHandle {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug)]
struct Scheduled<T> {
    handle: TaskHandle,
    due: Duration,
    task: T,
}

/// Deferred task queue.
#[derive(Clone, Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    pending: Vec<Scheduled<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Run `task` once `delay` has passed.
    ///
    /// Due times saturate at `Duration::MAX`.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            handle,
            due: self.now.saturating_add(delay),
            task,
        });
        handle
    }

    /// Whether the task is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.iter().any(|s| s.handle == handle)
    }

    /// When a pending task is due.
    #[must_use]
    pub fn due_at(&self, handle: TaskHandle) -> Option<Duration> {
        self.pending.iter().find(|s| s.handle == handle).map(|s| s.due)
    }

    /// Cancel a task. Returns the task if it had not fired yet.
    pub fn cancel(&mut self, handle: TaskHandle) -> Option<T> {
        let index = self.pending.iter().position(|s| s.handle == handle)?;
        Some(self.pending.remove(index).task)
    }

    /// Earliest due time among pending tasks.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|s| s.due).min()
    }

    /// Move the clock to `at` and return every task due by then.
    ///
    /// The clock never moves backwards; an earlier `at` only collects tasks
    /// already due.
    pub fn advance_to(&mut self, at: Duration) -> Vec<(TaskHandle, T)> {
        self.now = self.now.max(at);
        let now = self.now;

        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|s| s.due <= now);
        self.pending = waiting;

        due.sort_by_key(|s| (s.due, s.handle));
        due.into_iter().map(|s| (s.handle, s.task)).collect()
    }

    /// Move the clock forward by `elapsed`.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<(TaskHandle, T)> {
        self.advance_to(self.now.saturating_add(elapsed))
    }
}
