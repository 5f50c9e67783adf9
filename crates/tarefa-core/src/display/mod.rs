//! Markdown formatting for tasks and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Collections and operation outcomes get small wrapper types so the same
//! task can be shown differently after a create, an update or a delete.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Wrappers and   │    │    Markdown     │
//! │  (Task, Stats)  │───▶│  Result Types   │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tarefa_core::{
//!     display::{OperationStatus, UpdateResult},
//!     models::{Priority, Task},
//! };
//! use jiff::Timestamp;
//!
//! let task = Task {
//!     id: 1,
//!     text: "Pay rent".to_string(),
//!     description: String::new(),
//!     completed: false,
//!     priority: Priority::Urgent,
//!     day: None,
//!     date: None,
//!     created_at: Timestamp::now(),
//! };
//!
//! let update = UpdateResult::with_changes(task, vec!["Updated text".to_string()]);
//! assert!(format!("{update}").contains("- Updated text"));
//!
//! let status = OperationStatus::success("Nothing to clear");
//! assert_eq!(status.to_string(), "Success: Nothing to clear\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Tasks;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, ToggleResult, UpdateResult};
pub use status::OperationStatus;
