//! Display implementations for domain models.
//!
//! Output is markdown, meant for the CLI's terminal renderer.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{FilterMode, Priority, Task, TaskStats, Weekday};

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.completed { "✓" } else { "○" };
        writeln!(
            f,
            "### {check} {} ({})",
            self.text,
            self.priority.with_icon()
        )?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        if let (Some(date), Some(day)) = (self.date, self.day) {
            writeln!(f, "- Date: {date} ({day})")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for TaskStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.total == 1 { "task" } else { "tasks" };
        write!(
            f,
            "{} {noun} ({} active, {} completed)",
            self.total, self.active, self.completed
        )
    }
}
