//! Validated request types built from raw parameters.

use jiff::civil::Date;

use super::Priority;
use crate::{
    error::{Result, TodoError},
    params::{parse_date, validate_description, validate_text, AddTask, EditTask},
};

/// A validated task ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub text: String,
    pub description: String,
    pub priority: Priority,
    pub date: Option<Date>,
}

impl NewTask {
    /// Validate [`AddTask`] parameters.
    ///
    /// When `require_date` is set, a missing or blank date is rejected;
    /// otherwise a blank date means "no date".
    ///
    /// # Errors
    ///
    /// * `TodoError::InvalidInput` - Blank or over-long text, over-long
    ///   description, unparseable date, or missing required date
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tarefa_core::{models::{NewTask, Priority}, params::AddTask};
    ///
    /// let params = AddTask {
    ///     text: "Buy milk".to_string(),
    ///     priority: Some(Priority::Urgent),
    ///     ..Default::default()
    /// };
    /// let task = NewTask::from_params(&params, false)?;
    /// assert_eq!(task.priority, Priority::Urgent);
    /// assert_eq!(task.description, "");
    ///
    /// assert!(NewTask::from_params(&params, true).is_err());
    /// # Ok::<(), tarefa_core::TodoError>(())
    /// ```
    pub fn from_params(params: &AddTask, require_date: bool) -> Result<Self> {
        let text = validate_text(&params.text)?;
        let description = validate_description(params.description.as_deref().unwrap_or(""))?;
        let date = optional_date(params.date.as_deref(), require_date)?;

        Ok(Self {
            text,
            description,
            priority: params.priority.unwrap_or_default(),
            date,
        })
    }
}

/// A validated set of field changes for an existing task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskChanges {
    pub text: Option<String>,
    pub description: Option<String>,
    /// `Some(None)` clears the date
    pub date: Option<Option<Date>>,
}

impl TaskChanges {
    /// Validate [`EditTask`] parameters.
    ///
    /// # Errors
    ///
    /// * `TodoError::InvalidInput` - Same rules as [`NewTask::from_params`];
    ///   clearing the date is rejected when dates are required
    pub fn from_params(params: &EditTask, require_date: bool) -> Result<Self> {
        let text = params.text.as_deref().map(validate_text).transpose()?;
        let description = params
            .description
            .as_deref()
            .map(validate_description)
            .transpose()?;
        let date = match params.date.as_deref() {
            Some(raw) => Some(optional_date(Some(raw), require_date)?),
            None => None,
        };

        Ok(Self {
            text,
            description,
            date,
        })
    }

    /// Changes that only replace the text.
    pub fn text(text: &str) -> Result<Self> {
        Ok(Self {
            text: Some(validate_text(text)?),
            ..Default::default()
        })
    }
}

fn optional_date(raw: Option<&str>, require_date: bool) -> Result<Option<Date>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => parse_date(s).map(Some),
        None if require_date => {
            Err(TodoError::invalid_input("date").with_reason("A date is required"))
        }
        None => Ok(None),
    }
}
