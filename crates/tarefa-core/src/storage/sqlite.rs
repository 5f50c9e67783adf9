//! SQLite-backed key-value storage.

use std::path::Path;

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use super::Storage;
use crate::error::{Result, StorageResultExt};

const SELECT_ITEM_SQL: &str = "SELECT value FROM kv WHERE key = ?1";
const UPSERT_ITEM_SQL: &str = "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_ITEM_SQL: &str = "DELETE FROM kv WHERE key = ?1";

/// A [`Storage`] holding one row per key in an SQLite database file.
pub struct SqliteStorage {
    connection: Connection,
}

impl SqliteStorage {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path.as_ref()).storage_context("Failed to open database connection")?;
        debug!("Opened storage at {}", path.as_ref().display());

        let storage = Self { connection };
        storage.initialize_schema()?;
        Ok(storage)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().storage_context("Failed to open in-memory database")?;

        let storage = Self { connection };
        storage.initialize_schema()?;
        Ok(storage)
    }

    /// Initializes the schema using the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .storage_context("Failed to initialize database schema")
    }
}

impl Storage for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_ITEM_SQL, params![key], |row| row.get::<_, String>(0))
            .optional()
            .storage_context("Failed to read item")
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_ITEM_SQL, params![key, value, now])
            .storage_context("Failed to write item")?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.connection
            .execute(DELETE_ITEM_SQL, params![key])
            .storage_context("Failed to remove item")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_round_trip() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        assert_eq!(storage.get_item("todos").unwrap(), None);

        storage.set_item("todos", "[]").unwrap();
        storage.set_item("todos", "[{\"id\":1}]").unwrap();
        assert_eq!(
            storage.get_item("todos").unwrap().as_deref(),
            Some("[{\"id\":1}]")
        );

        storage.remove_item("todos").unwrap();
        assert_eq!(storage.get_item("todos").unwrap(), None);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        storage.set_item("todos", "a").unwrap();
        storage.set_item("other", "b").unwrap();

        assert_eq!(storage.get_item("todos").unwrap().as_deref(), Some("a"));
        assert_eq!(storage.get_item("other").unwrap().as_deref(), Some("b"));
    }
}
