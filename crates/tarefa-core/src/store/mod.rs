//! The task store: the authoritative task collection and its operations.
//!
//! A [`TaskStore`] owns the in-memory list of [`Task`]s and a
//! [`Persistence`] adapter. It is built once at start (see
//! [`TaskStoreBuilder`]) and passed by reference to whatever drives it.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Presentation   │    │    TaskStore    │    │   Persistence   │
//! │ (CLI, UI, ...)  │───▶│  (task_ops,     │───▶│   + Storage     │
//! │                 │◀───│   queries)      │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!    render views         mutate + derive        save whole list
//! ```
//!
//! Every successful mutation is saved before it returns. Mutations run on a
//! working copy that is swapped in only after the save succeeds, so a failed
//! operation leaves the store exactly as it was.
//!
//! # Examples
//!
//! ```rust
//! use tarefa_core::{
//!     models::{FilterMode, Priority},
//!     params::AddTask,
//!     storage::MemoryStorage,
//!     TaskStoreBuilder,
//! };
//!
//! let mut store = TaskStoreBuilder::new().build_with(MemoryStorage::new())?;
//!
//! store.add(&AddTask {
//!     text: "Write report".to_string(),
//!     ..Default::default()
//! })?;
//! let milk = store.add(&AddTask {
//!     text: "Buy milk".to_string(),
//!     priority: Some(Priority::Urgent),
//!     ..Default::default()
//! })?;
//!
//! let outcome = store.toggle(milk.id)?;
//! assert!(outcome.transitioned);
//!
//! assert_eq!(store.visible(FilterMode::Active)[0].text, "Write report");
//! assert_eq!(store.stats().completed, 1);
//! # Ok::<(), tarefa_core::TodoError>(())
//! ```

use jiff::Timestamp;
use log::info;

use crate::{
    display::Tasks,
    error::{Result, TodoError},
    models::{FilterMode, Task, TaskStats},
    params::ListTasks,
    persistence::{Loaded, Persistence},
    storage::{SqliteStorage, Storage},
    views,
};

pub mod builder;
pub mod task_ops;


pub use builder::TaskStoreBuilder;
pub use task_ops::{EditOutcome, ToggleOutcome};

/// The task collection plus the storage it is synchronized with.
pub struct TaskStore<S: Storage = SqliteStorage> {
    tasks: Vec<Task>,
    persistence: Persistence<S>,
    require_date: bool,
}

impl<S: Storage> TaskStore<S> {
    /// Loads the stored collection and makes it ready for use.
    ///
    /// Records written by older versions are normalized; if any needed a
    /// default filled in, the normalized collection is saved right away.
    pub(crate) fn initialize(storage: S, require_date: bool) -> Result<Self> {
        let persistence = Persistence::new(storage);
        let Loaded { tasks, normalized } = persistence.load()?;

        let mut store = Self {
            tasks,
            persistence,
            require_date,
        };

        if normalized {
            info!("Normalized legacy task records, saving them back");
            store.persistence.save(&store.tasks)?;
        }

        info!("Task store ready with {} task(s)", store.tasks.len());
        Ok(store)
    }

    /// Applies `mutate` to a copy of the collection, saves the copy and
    /// only then makes it current.
    pub(crate) fn commit<T>(
        &mut self,
        mutate: impl FnOnce(&mut Vec<Task>) -> Result<T>,
    ) -> Result<T> {
        let mut next = self.tasks.clone();
        let output = mutate(&mut next)?;
        self.persistence.save(&next)?;
        self.tasks = next;
        Ok(output)
    }

    /// A fresh id: the current time in milliseconds, bumped past the newest
    /// existing id so ids stay unique and increasing.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::IdsExhausted` if the newest id is already
    /// `u64::MAX`.
    pub(crate) fn next_id(&self) -> Result<u64> {
        let now = u64::try_from(Timestamp::now().as_millisecond()).unwrap_or(0);
        match self.tasks.iter().map(|t| t.id).max() {
            Some(last) if last >= now => last
                .checked_add(1)
                .ok_or(TodoError::IdsExhausted { last }),
            _ => Ok(now),
        }
    }

    /// Every task, newest first.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// The task with the given id.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Like [`TaskStore::get`], but a missing id is an error.
    pub fn require(&self, id: u64) -> Result<&Task> {
        self.get(id).ok_or(TodoError::TaskNotFound { id })
    }

    /// Tasks matching `mode`, in stored order.
    pub fn filtered(&self, mode: FilterMode) -> Vec<Task> {
        views::filter(&self.tasks, mode)
    }

    /// Tasks matching `mode`, sorted by priority then recency.
    pub fn visible(&self, mode: FilterMode) -> Vec<Task> {
        views::visible(&self.tasks, mode)
    }

    /// The list view for a set of list parameters.
    pub fn list(&self, params: &ListTasks) -> Tasks {
        Tasks(self.visible(params.filter))
    }

    /// Counts recomputed from the current collection.
    pub fn stats(&self) -> TaskStats {
        views::stats(&self.tasks)
    }

    /// Whether new tasks must carry a date.
    pub fn requires_date(&self) -> bool {
        self.require_date
    }

    /// The storage backend the store saves to.
    pub fn storage(&self) -> &S {
        self.persistence.storage()
    }
}
