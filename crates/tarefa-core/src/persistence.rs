//! Loading and saving the task collection.
//!
//! The whole collection is written as one JSON array under
//! [`TODOS_KEY`](crate::storage::TODOS_KEY) on every save. Loading accepts
//! records written by older versions, which may lack `priority`,
//! `description`, `day`, `date` or `createdAt`, and fills them in so the rest
//! of the crate only ever sees complete [`Task`]s.

use jiff::{civil::Date, Timestamp};
use log::{debug, warn};
use serde::{Deserialize, Deserializer};

use crate::{
    error::Result,
    models::{
        text_units, truncate_units, Priority, Task, Weekday, MAX_DESCRIPTION_UNITS, MAX_TEXT_UNITS,
    },
    storage::{Storage, TODOS_KEY},
};

/// Result of [`Persistence::load`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Loaded {
    /// The normalized tasks, in stored order
    pub tasks: Vec<Task>,
    /// True if any record needed a default filled in
    pub normalized: bool,
}

/// Reads and writes the task collection through a [`Storage`] backend.
pub struct Persistence<S> {
    storage: S,
}

impl<S: Storage> Persistence<S> {
    /// Wraps a storage backend.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Loads the stored collection.
    ///
    /// A missing key yields an empty collection. A value that does not parse
    /// as an array of task records is treated the same way and logged; the
    /// next save overwrites it.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Storage` if the backend itself fails to read.
    pub fn load(&self) -> Result<Loaded> {
        let Some(raw) = self.storage.get_item(TODOS_KEY)? else {
            debug!("No stored tasks under '{TODOS_KEY}'");
            return Ok(Loaded::default());
        };

        let records: Vec<StoredTask> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("Stored tasks are unreadable, starting empty: {e}");
                return Ok(Loaded::default());
            }
        };

        let mut normalized = false;
        let tasks = records
            .into_iter()
            .filter_map(|record| match record.normalize() {
                Some((task, changed)) => {
                    normalized |= changed;
                    Some(task)
                }
                None => {
                    normalized = true;
                    None
                }
            })
            .collect();

        Ok(Loaded { tasks, normalized })
    }

    /// Serializes `tasks` and replaces the stored value.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Serialization` or `TodoError::Storage`; in both
    /// cases the previously stored value is left in place.
    pub fn save(&mut self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string(tasks)?;
        self.storage.set_item(TODOS_KEY, &json)?;
        debug!("Saved {} task(s)", tasks.len());
        Ok(())
    }

    /// The underlying storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// A task record as found in storage, with every optional field tolerated.
///
/// `Option<Option<_>>` fields distinguish a missing key (`None`) from an
/// explicit `null` (`Some(None)`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTask {
    id: u64,
    text: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    priority: Option<String>,
    #[serde(default, deserialize_with = "present")]
    day: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    date: Option<Option<String>>,
    #[serde(default)]
    created_at: Option<String>,
}

fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl StoredTask {
    /// Converts to a [`Task`], reporting whether any default was applied.
    ///
    /// Returns `None` for a record whose text is blank; such a record is
    /// dropped from the collection.
    fn normalize(self) -> Option<(Task, bool)> {
        let mut changed = false;

        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            warn!("Task {} has no text, dropping it", self.id);
            return None;
        }
        let text = truncate_units(trimmed, MAX_TEXT_UNITS);
        if text != self.text {
            changed = true;
        }

        let priority = match self.priority.as_deref().map(str::parse::<Priority>) {
            Some(Ok(priority)) => priority,
            _ => {
                changed = true;
                Priority::default()
            }
        };

        let description = match self.description {
            Some(description) if text_units(&description) > MAX_DESCRIPTION_UNITS => {
                warn!("Task {} has an over-long description, truncating it", self.id);
                changed = true;
                truncate_units(&description, MAX_DESCRIPTION_UNITS)
            }
            Some(description) => description,
            None => {
                changed = true;
                String::new()
            }
        };

        let date = match self.date {
            None => {
                changed = true;
                None
            }
            Some(None) => None,
            Some(Some(raw)) => match raw.parse::<Date>() {
                Ok(date) => Some(date),
                Err(_) => {
                    warn!("Task {} has an unreadable date '{raw}', dropping it", self.id);
                    changed = true;
                    None
                }
            },
        };

        let day = date.map(Weekday::from);
        let stored_day = match self.day {
            None => {
                changed = true;
                None
            }
            Some(day) => day.and_then(|d| d.parse::<Weekday>().ok()),
        };
        if stored_day != day {
            changed = true;
        }

        let created_at = match self.created_at.as_deref().map(str::parse::<Timestamp>) {
            Some(Ok(ts)) => ts,
            _ => {
                changed = true;
                i64::try_from(self.id)
                    .ok()
                    .and_then(|ms| Timestamp::from_millisecond(ms).ok())
                    .unwrap_or(Timestamp::UNIX_EPOCH)
            }
        };

        let task = Task {
            id: self.id,
            text,
            description,
            completed: self.completed,
            priority,
            day,
            date,
            created_at,
        };
        Some((task, changed))
    }
}
