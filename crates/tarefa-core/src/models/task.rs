//! Task model definition and related functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{Priority, Weekday};

/// Maximum length of a task's text, in UTF-16 code units.
pub const MAX_TEXT_UNITS: usize = 200;

/// Maximum length of a task's description, in UTF-16 code units.
pub const MAX_DESCRIPTION_UNITS: usize = 500;

/// A single to-do entry.
///
/// Field names are serialized in camelCase because they are the storage
/// format shared with previously saved data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, the creation time in milliseconds
    pub id: u64,

    /// Short title of the task
    pub text: String,

    /// Optional longer description, empty when not set
    pub description: String,

    /// Whether the task has been done
    pub completed: bool,

    /// Priority used for ordering
    pub priority: Priority,

    /// Weekday of `date`; only ever written through [`Task::set_date`]
    pub day: Option<Weekday>,

    /// Due date
    pub date: Option<Date>,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,
}

impl Task {
    /// Sets the due date and re-derives the weekday in one step.
    pub fn set_date(&mut self, date: Option<Date>) {
        self.date = date;
        self.day = date.map(Weekday::from);
    }
}

/// Length of a string in UTF-16 code units, the unit the length limits use.
pub fn text_units(s: &str) -> usize {
    s.encode_utf16().count()
}

/// The longest prefix of `s` that fits in `max` UTF-16 code units, cut on a
/// character boundary.
pub fn truncate_units(s: &str, max: usize) -> String {
    let mut units = 0;
    s.chars()
        .take_while(|c| {
            units += c.len_utf16();
            units <= max
        })
        .collect()
}
