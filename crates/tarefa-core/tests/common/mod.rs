use std::path::Path;

use tarefa_core::{TaskStore, TaskStoreBuilder};
use tempfile::TempDir;

/// Helper function to create a store backed by a temporary database
pub fn create_test_store() -> (TempDir, TaskStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir.path().join("test.db"));
    (temp_dir, store)
}

/// Opens (or reopens) a store on an existing database path
pub fn open_store(path: &Path) -> TaskStore {
    TaskStoreBuilder::new()
        .with_database_path(Some(path))
        .build()
        .expect("Failed to create store")
}
