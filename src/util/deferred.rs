//! Cancellable deferred tasks keyed by due time.
//!
//! DESIGN
//! ======
//! The queue owns the task payloads; whatever wakes it up (a browser timer,
//! a test advancing a manual clock) only decides *when* to look. Cancelling
//! removes the payload, so a late wake-up for a cancelled task finds nothing.
//!
//! Tasks with the same due time come out in schedule order.

#[cfg(test)]
#[path = "deferred_test.rs"]
mod deferred_test;

use std::collections::BTreeMap;

use crate::state::messaging::Timestamp;

/// Identifies one scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle {
    due: Timestamp,
    seq: u64,
}

impl TaskHandle {
    #[must_use]
    pub fn due(self) -> Timestamp {
        self.due
    }
}

#[derive(Debug)]
pub struct DeferredQueue<T> {
    next_seq: u64,
    tasks: BTreeMap<TaskHandle, T>,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self { next_seq: 0, tasks: BTreeMap::new() }
    }
}

impl<T> DeferredQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Timestamp, task: T) -> TaskHandle {
        let handle = TaskHandle { due, seq: self.next_seq };
        self.next_seq += 1;
        self.tasks.insert(handle, task);
        handle
    }

    /// Remove a pending task, returning it if it had not fired or been
    /// cancelled yet.
    pub fn take(&mut self, handle: TaskHandle) -> Option<T> {
        self.tasks.remove(&handle)
    }

    /// Drop a pending task. Returns `true` if something was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        self.tasks.remove(&handle).is_some()
    }

    /// Drop every pending task and return how many there were.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.tasks.len();
        self.tasks.clear();
        count
    }

    /// Remove and return every task due at or before `now`, earliest first.
    pub fn take_due(&mut self, now: Timestamp) -> Vec<(TaskHandle, T)> {
        let mut due = Vec::new();
        while let Some(entry) = self.tasks.first_entry() {
            if entry.key().due > now {
                break;
            }
            due.push(entry.remove_entry());
        }
        due
    }

    #[must_use]
    pub fn next_due(&self) -> Option<Timestamp> {
        self.tasks.keys().next().map(|h| h.due)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
