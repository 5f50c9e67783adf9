//! Parameter structures for task store operations
//!
//! These structures are shared by every interface that drives the store
//! (the CLI today, anything else tomorrow) and carry no framework-specific
//! derives. Interface layers define their own argument types and convert into
//! these with `From`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │  Validated      │
//! │  (clap derives) │───▶│ (this module)   │───▶│  requests       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Raw text is validated here: trimming, length limits in UTF-16 code units,
//! and ISO date parsing.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TodoError},
    models::{text_units, FilterMode, Priority, MAX_DESCRIPTION_UNITS, MAX_TEXT_UNITS},
};

/// Generic parameters for operations requiring just an ID.
///
/// Used by toggle, delete, cycle priority and show.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the task to operate on
    pub id: u64,
}

/// Parameters for adding a new task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddTask {
    /// Title of the task (required)
    pub text: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Priority, `simple` when omitted
    pub priority: Option<Priority>,
    /// Due date as `YYYY-MM-DD`
    pub date: Option<String>,
}

/// Parameters for editing an existing task.
///
/// Every field is optional; omitted fields are left untouched. An empty
/// `date` clears the due date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditTask {
    /// Task ID to edit (required)
    pub id: u64,
    /// New title
    pub text: Option<String>,
    /// New description, empty to clear
    pub description: Option<String>,
    /// New due date as `YYYY-MM-DD`, empty to clear
    pub date: Option<String>,
}

/// Parameters for setting a task's priority explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetPriority {
    /// Task ID
    pub id: u64,
    /// The priority to assign
    pub priority: Priority,
}

/// Parameters for listing tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTasks {
    /// Which tasks to show
    #[serde(default)]
    pub filter: FilterMode,
}

/// Trim and validate a task title.
///
/// # Errors
///
/// * `TodoError::InvalidInput` - When the text is blank or longer than
///   [`MAX_TEXT_UNITS`]
///
/// # Examples
///
/// ```rust
/// use tarefa_core::params::validate_text;
///
/// assert_eq!(validate_text("  Buy milk ")?, "Buy milk");
/// assert!(validate_text("   ").is_err());
/// # Ok::<(), tarefa_core::TodoError>(())
/// ```
pub fn validate_text(text: &str) -> Result<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TodoError::invalid_input("text").with_reason("Text cannot be empty"));
    }
    if text_units(text) > MAX_TEXT_UNITS {
        return Err(TodoError::invalid_input("text")
            .with_reason(format!("Text cannot exceed {MAX_TEXT_UNITS} characters")));
    }
    Ok(text.to_string())
}

/// Trim and validate a task description. An empty description is valid.
pub fn validate_description(description: &str) -> Result<String> {
    let description = description.trim();
    if text_units(description) > MAX_DESCRIPTION_UNITS {
        return Err(TodoError::invalid_input("description").with_reason(format!(
            "Description cannot exceed {MAX_DESCRIPTION_UNITS} characters"
        )));
    }
    Ok(description.to_string())
}

/// Parse an ISO `YYYY-MM-DD` calendar date.
pub fn parse_date(date: &str) -> Result<Date> {
    let date = date.trim();
    date.parse::<Date>().map_err(|e| {
        TodoError::invalid_input("date").with_reason(format!(
            "Invalid date '{date}': expected YYYY-MM-DD ({e})"
        ))
    })
}
