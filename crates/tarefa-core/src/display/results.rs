//! Result wrapper types for displaying operation outcomes.
//!
//! These format the results of create, update, toggle and delete operations
//! with a one-line message followed by the affected task.

use std::fmt;

use crate::{
    models::Task,
    store::{EditOutcome, ToggleOutcome},
};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use tarefa_core::{display::CreateResult, models::{Priority, Task}};
/// use jiff::Timestamp;
///
/// let task = Task {
///     id: 7,
///     text: "Call mom".to_string(),
///     description: String::new(),
///     completed: false,
///     priority: Priority::Medium,
///     day: None,
///     date: None,
///     created_at: Timestamp::now(),
/// };
///
/// let output = format!("{}", CreateResult::new(task));
/// assert!(output.starts_with("Created task with ID: 7"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created task with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Tracks the list of changes made so users can see what was modified.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl From<EditOutcome> for UpdateResult<Task> {
    fn from(outcome: EditOutcome) -> Self {
        Self::with_changes(outcome.task, outcome.changes)
    }
}

impl fmt::Display for UpdateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated task with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of a completion toggle.
pub struct ToggleResult(pub ToggleOutcome);

impl fmt::Display for ToggleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let task = &self.0.task;
        if self.0.transitioned {
            writeln!(f, "Task completed! 🎉 '{}'", task.text)?;
        } else {
            writeln!(f, "Reopened '{}'", task.text)?;
        }
        writeln!(f)?;
        write!(f, "{task}")
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted task '{}' (ID: {})",
            self.resource.text, self.resource.id
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::Priority;

    fn task(completed: bool) -> Task {
        Task {
            id: 3,
            text: "Read a book".to_string(),
            description: String::new(),
            completed,
            priority: Priority::Simple,
            day: None,
            date: None,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_update_result_lists_changes() {
        let result = UpdateResult::with_changes(task(false), vec!["Updated text".to_string()]);
        let output = format!("{result}");

        assert!(output.contains("Updated task with ID: 3"));
        assert!(output.contains("Changes made:"));
        assert!(output.contains("- Updated text"));
    }

    #[test]
    fn test_update_result_without_changes() {
        let output = format!("{}", UpdateResult::new(task(false)));
        assert!(!output.contains("Changes made:"));
    }

    #[test]
    fn test_toggle_result_messages() {
        let done = ToggleResult(ToggleOutcome {
            task: task(true),
            transitioned: true,
        });
        assert!(format!("{done}").contains("Task completed!"));

        let reopened = ToggleResult(ToggleOutcome {
            task: task(false),
            transitioned: false,
        });
        assert!(format!("{reopened}").contains("Reopened 'Read a book'"));
    }

    #[test]
    fn test_delete_result() {
        let output = format!("{}", DeleteResult::new(task(false)));
        assert_eq!(output, "Deleted task 'Read a book' (ID: 3)\n");
    }
}
