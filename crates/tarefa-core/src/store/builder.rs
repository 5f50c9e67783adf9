//! Builder for creating and configuring TaskStore instances.

use std::path::{Path, PathBuf};

use super::TaskStore;
use crate::{
    error::{Result, TodoError},
    storage::{SqliteStorage, Storage},
};

/// Builder for creating and configuring TaskStore instances.
#[derive(Debug, Clone, Default)]
pub struct TaskStoreBuilder {
    database_path: Option<PathBuf>,
    require_date: bool,
}

impl TaskStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/tarefa/tarefa.db` or `~/.local/share/tarefa/tarefa.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Requires every new task to carry a due date.
    pub fn require_date(mut self, require: bool) -> Self {
        self.require_date = require;
        self
    }

    /// Builds a store backed by an SQLite file.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::XdgDirectory` if no default path can be resolved
    /// Returns `TodoError::FileSystem` if the parent directory can't be created
    /// Returns `TodoError::Storage` if the database can't be opened or read
    pub fn build(self) -> Result<TaskStore<SqliteStorage>> {
        let db_path = match self.database_path.clone() {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TodoError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let storage = SqliteStorage::open(&db_path)?;
        self.build_with(storage)
    }

    /// Builds a store on top of any storage backend.
    pub fn build_with<S: Storage>(self, storage: S) -> Result<TaskStore<S>> {
        TaskStore::initialize(storage, self.require_date)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("tarefa")
            .place_data_file("tarefa.db")
            .map_err(|e| TodoError::XdgDirectory(e.to_string()))
    }
}
