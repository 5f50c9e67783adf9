//! Task mutations for the TaskStore.

use jiff::Timestamp;
use log::debug;

use super::TaskStore;
use crate::{
    error::{Result, TodoError},
    models::{NewTask, Task, TaskChanges},
    params::{AddTask, EditTask, SetPriority},
    storage::Storage,
};

/// Result of [`TaskStore::toggle`].
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleOutcome {
    /// The task after the toggle
    pub task: Task,
    /// True when the task went from open to completed
    pub transitioned: bool,
}

/// Result of [`TaskStore::edit`] and [`TaskStore::edit_text`].
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    /// The task after the edit
    pub task: Task,
    /// Human readable list of what changed, empty when nothing did
    pub changes: Vec<String>,
}

impl EditOutcome {
    /// Whether the edit left the task as it was.
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }
}

fn find_mut(tasks: &mut [Task], id: u64) -> Result<&mut Task> {
    tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(TodoError::TaskNotFound { id })
}

impl<S: Storage> TaskStore<S> {
    /// Adds a new task at the front of the list.
    ///
    /// # Errors
    ///
    /// * `TodoError::InvalidInput` - Blank or over-long text, over-long
    ///   description, bad date, or missing date when dates are required
    /// * `TodoError::IdsExhausted` - The newest stored id leaves no room
    /// * `TodoError::Storage` - The save failed; nothing was added
    pub fn add(&mut self, params: &AddTask) -> Result<Task> {
        let NewTask {
            text,
            description,
            priority,
            date,
        } = NewTask::from_params(params, self.require_date)?;

        let mut task = Task {
            id: self.next_id()?,
            text,
            description,
            completed: false,
            priority,
            day: None,
            date: None,
            created_at: Timestamp::now(),
        };
        task.set_date(date);

        let created = task.clone();
        self.commit(move |tasks| {
            tasks.insert(0, task);
            Ok(())
        })?;

        debug!("Added task {} ({})", created.id, created.priority.as_str());
        Ok(created)
    }

    /// Flips the completed flag of a task.
    ///
    /// The outcome reports whether the task was just completed, so callers
    /// can show a one-off notice.
    pub fn toggle(&mut self, id: u64) -> Result<ToggleOutcome> {
        let outcome = self.commit(|tasks| {
            let task = find_mut(tasks, id)?;
            task.completed = !task.completed;
            Ok(ToggleOutcome {
                transitioned: task.completed,
                task: task.clone(),
            })
        })?;

        debug!("Toggled task {id}, completed = {}", outcome.task.completed);
        Ok(outcome)
    }

    /// Removes a task. Removing an unknown id is not an error.
    ///
    /// Returns the removed task, if there was one.
    pub fn delete(&mut self, id: u64) -> Result<Option<Task>> {
        let removed = self.commit(|tasks| {
            Ok(tasks
                .iter()
                .position(|t| t.id == id)
                .map(|index| tasks.remove(index)))
        })?;

        debug!("Deleted task {id}: {}", removed.is_some());
        Ok(removed)
    }

    /// Sets a task's priority to an explicit value.
    pub fn set_priority(&mut self, params: &SetPriority) -> Result<Task> {
        let priority = params.priority;
        self.commit(|tasks| {
            let task = find_mut(tasks, params.id)?;
            task.priority = priority;
            Ok(task.clone())
        })
    }

    /// Advances a task's priority through simple → medium → urgent → simple.
    pub fn cycle_priority(&mut self, id: u64) -> Result<Task> {
        let task = self.commit(|tasks| {
            let task = find_mut(tasks, id)?;
            task.priority = task.priority.next();
            Ok(task.clone())
        })?;

        debug!("Task {id} priority is now {}", task.priority.as_str());
        Ok(task)
    }

    /// Replaces a task's text.
    pub fn edit_text(&mut self, id: u64, text: &str) -> Result<EditOutcome> {
        let changes = TaskChanges::text(text)?;
        self.apply_changes(id, changes)
    }

    /// Edits text, description and date of a task in one operation.
    ///
    /// A new date re-derives the weekday. An edit that changes nothing is
    /// reported as unchanged and not saved.
    ///
    /// # Errors
    ///
    /// * `TodoError::InvalidInput` - Any supplied field fails validation
    /// * `TodoError::TaskNotFound` - No task has the given id
    pub fn edit(&mut self, params: &EditTask) -> Result<EditOutcome> {
        let changes = TaskChanges::from_params(params, self.require_date)?;
        self.apply_changes(params.id, changes)
    }

    fn apply_changes(&mut self, id: u64, changes: TaskChanges) -> Result<EditOutcome> {
        let mut task = self.require(id)?.clone();
        let mut made = Vec::new();

        if let Some(text) = changes.text.filter(|t| *t != task.text) {
            task.text = text;
            made.push("Updated text".to_string());
        }

        if let Some(description) = changes.description.filter(|d| *d != task.description) {
            made.push(if description.is_empty() {
                "Cleared description".to_string()
            } else {
                "Updated description".to_string()
            });
            task.description = description;
        }

        if let Some(date) = changes.date.filter(|d| *d != task.date) {
            task.set_date(date);
            made.push(match (task.date, task.day) {
                (Some(date), Some(day)) => format!("Set date to {date} ({})", day.label()),
                _ => "Cleared date".to_string(),
            });
        }

        if made.is_empty() {
            debug!("Edit of task {id} changed nothing");
            return Ok(EditOutcome {
                task,
                changes: made,
            });
        }

        let updated = task.clone();
        self.commit(move |tasks| {
            *find_mut(tasks, id)? = task;
            Ok(())
        })?;

        debug!("Edited task {id}: {}", made.join(", "));
        Ok(EditOutcome {
            task: updated,
            changes: made,
        })
    }

    /// Removes every completed task, keeping the order of the rest.
    ///
    /// Returns how many tasks were removed.
    pub fn clear_completed(&mut self) -> Result<usize> {
        let removed = self.commit(|tasks| {
            let before = tasks.len();
            tasks.retain(|t| !t.completed);
            Ok(before - tasks.len())
        })?;

        debug!("Cleared {removed} completed task(s)");
        Ok(removed)
    }
}
