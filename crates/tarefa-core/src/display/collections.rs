//! Collection wrapper types for displaying groups of tasks.

use std::fmt;

use crate::models::Task;

/// Newtype wrapper for displaying a list of tasks.
///
/// Handles empty collections gracefully.
///
/// # Examples
///
/// ```rust
/// use tarefa_core::{display::Tasks, models::{Priority, Task}};
/// use jiff::Timestamp;
///
/// let task = Task {
///     id: 1,
///     text: "Water the plants".to_string(),
///     description: String::new(),
///     completed: false,
///     priority: Priority::Simple,
///     day: None,
///     date: None,
///     created_at: Timestamp::now(),
/// };
///
/// let output = format!("{}", Tasks(vec![task]));
/// assert!(output.contains("Water the plants"));
/// assert_eq!(format!("{}", Tasks(vec![])), "No tasks found.\n");
/// ```
pub struct Tasks(pub Vec<Task>);

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tasks found.")
        } else {
            for task in &self.0 {
                write!(f, "{}", task)?;
            }
            Ok(())
        }
    }
}
