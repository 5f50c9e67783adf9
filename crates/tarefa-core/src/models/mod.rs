//! Data models for tasks.
//!
//! This module holds the domain types of the to-do list: the [`Task`] record,
//! its [`Priority`] and [`Weekday`] enumerations, the [`FilterMode`] used by
//! list views, the derived [`TaskStats`] counts, and the validated request
//! types the store consumes. Display implementations live in
//! [`crate::display::models`].
//!
//! Every value a presentation layer needs for rendering (labels, icons,
//! weekday names) comes from an exhaustive `match` on these enums.
//!
//! # Examples
//!
//! ```rust
//! use tarefa_core::models::{Priority, Task, Weekday};
//! use jiff::{civil::date, Timestamp};
//!
//! let mut task = Task {
//!     id: 1,
//!     text: "Write report".to_string(),
//!     description: String::new(),
//!     completed: false,
//!     priority: Priority::Medium,
//!     day: None,
//!     date: None,
//!     created_at: Timestamp::now(),
//! };
//! task.set_date(Some(date(2024, 1, 8)));
//! assert_eq!(task.day, Some(Weekday::Segunda));
//! ```

pub mod filters;
pub mod priority;
pub mod requests;
pub mod stats;
pub mod task;
pub mod weekday;

#[cfg(test)]
mod tests;

pub use filters::FilterMode;
pub use priority::Priority;
pub use requests::{NewTask, TaskChanges};
pub use stats::TaskStats;
pub use task::{text_units, truncate_units, Task, MAX_DESCRIPTION_UNITS, MAX_TEXT_UNITS};
pub use weekday::Weekday;
