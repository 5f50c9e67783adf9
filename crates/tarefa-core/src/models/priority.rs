//! Priority levels for tasks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of task priorities.
///
/// The order of declaration is the display order of the cycle, not the sort
/// order; see [`Priority::rank`] for sorting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Everyday task
    #[default]
    Simple,

    /// Should be done soon
    Medium,

    /// Needs attention first
    Urgent,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(Priority::Simple),
            "medium" => Ok(Priority::Medium),
            "urgent" => Ok(Priority::Urgent),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// All priorities in cycle order.
    pub const ALL: [Priority; 3] = [Priority::Simple, Priority::Medium, Priority::Urgent];

    /// Convert to the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Simple => "simple",
            Priority::Medium => "medium",
            Priority::Urgent => "urgent",
        }
    }

    /// Sort rank: lower ranks are listed first.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Urgent => 0,
            Priority::Medium => 1,
            Priority::Simple => 2,
        }
    }

    /// Next priority in the cycle simple → medium → urgent → simple.
    pub fn next(&self) -> Self {
        match self {
            Priority::Simple => Priority::Medium,
            Priority::Medium => Priority::Urgent,
            Priority::Urgent => Priority::Simple,
        }
    }

    /// Flag icon used in list output.
    pub fn with_icon(&self) -> &'static str {
        match self {
            Priority::Urgent => "▲ urgent",
            Priority::Medium => "◆ medium",
            Priority::Simple => "▽ simple",
        }
    }
}
