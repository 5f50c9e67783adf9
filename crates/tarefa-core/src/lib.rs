//! Core library for the Tarefa to-do list.
//!
//! This crate owns the task collection and everything derived from it:
//! validation, filtering, priority ordering, statistics, weekday names and
//! persistence of the whole list as JSON under a single storage key.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): `Task`, `Priority`, `Weekday`, `FilterMode`
//! - **Store** ([`store`]): the authoritative collection and its mutations
//! - **Views** ([`views`]): pure filter, sort and stats functions
//! - **Persistence** ([`persistence`], [`storage`]): JSON load and save on a
//!   string key-value backend (SQLite file or in-memory)
//! - **Display** ([`display`]): markdown formatting for the CLI renderer
//!
//! # Quick Start
//!
//! ```rust
//! use tarefa_core::{params::AddTask, storage::MemoryStorage, FilterMode, TaskStoreBuilder};
//!
//! let mut store = TaskStoreBuilder::new().build_with(MemoryStorage::new())?;
//!
//! let task = store.add(&AddTask {
//!     text: "Plan the week".to_string(),
//!     date: Some("2024-01-08".to_string()),
//!     ..Default::default()
//! })?;
//! println!("{task}");
//!
//! store.toggle(task.id)?;
//! assert!(store.visible(FilterMode::Active).is_empty());
//! assert_eq!(store.stats().total, 1);
//! # Ok::<(), tarefa_core::TodoError>(())
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod persistence;
pub mod storage;
pub mod store;
pub mod views;

// Re-export commonly used types
pub use display::{
    CreateResult, DeleteResult, LocalDateTime, OperationStatus, Tasks, ToggleResult, UpdateResult,
};
pub use error::{Result, TodoError};
pub use models::{FilterMode, Priority, Task, TaskStats, Weekday};
pub use params::{AddTask, EditTask, Id, ListTasks, SetPriority};
pub use storage::{MemoryStorage, SqliteStorage, Storage};
pub use store::{EditOutcome, TaskStore, TaskStoreBuilder, ToggleOutcome};
