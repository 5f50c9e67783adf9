//! Aggregate counts over a task collection.

use serde::{Deserialize, Serialize};

use super::Task;

/// Counts of tasks by completion state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskStats {
    /// Number of tasks
    pub total: usize,
    /// Number of tasks still open
    pub active: usize,
    /// Number of completed tasks
    pub completed: usize,
}

impl TaskStats {
    /// Whether there is anything for "clear completed" to remove.
    pub fn has_completed(&self) -> bool {
        self.completed > 0
    }
}

impl<'a> FromIterator<&'a Task> for TaskStats {
    fn from_iter<I: IntoIterator<Item = &'a Task>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            if task.completed {
                stats.completed += 1;
            } else {
                stats.active += 1;
            }
            stats
        })
    }
}
