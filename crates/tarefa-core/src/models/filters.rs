//! Filter modes for listing tasks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Task;

/// Which tasks a list view shows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Every task
    #[default]
    All,

    /// Tasks not yet completed
    Active,

    /// Completed tasks
    Completed,
}

impl FilterMode {
    /// Whether a task belongs to this view.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !task.completed,
            FilterMode::Completed => task.completed,
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Completed => "completed",
        }
    }

    /// Heading used when listing tasks under this filter.
    pub fn title(&self) -> &'static str {
        match self {
            FilterMode::All => "All Tasks",
            FilterMode::Active => "Active Tasks",
            FilterMode::Completed => "Completed Tasks",
        }
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "active" => Ok(FilterMode::Active),
            "completed" | "done" => Ok(FilterMode::Completed),
            _ => Err(format!("Invalid filter: {s}")),
        }
    }
}
