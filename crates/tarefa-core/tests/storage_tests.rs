use tarefa_core::{
    storage::{SqliteStorage, Storage, TODOS_KEY},
    TaskStoreBuilder,
};
use tempfile::NamedTempFile;

fn create_test_storage() -> (NamedTempFile, SqliteStorage) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let storage = SqliteStorage::open(temp_file.path()).expect("Failed to open storage");
    (temp_file, storage)
}

#[test]
fn test_storage_initialization() {
    let (temp_file, storage) = create_test_storage();

    assert!(temp_file.path().exists());
    assert_eq!(storage.get_item(TODOS_KEY).unwrap(), None);
}

#[test]
fn test_values_survive_reopen() {
    let (temp_file, mut storage) = create_test_storage();
    storage.set_item(TODOS_KEY, "[]").unwrap();
    drop(storage);

    let reopened = SqliteStorage::open(temp_file.path()).unwrap();
    assert_eq!(reopened.get_item(TODOS_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_set_item_overwrites() {
    let (_temp_file, mut storage) = create_test_storage();

    storage.set_item("k", "one").unwrap();
    storage.set_item("k", "two").unwrap();
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("two"));

    storage.remove_item("k").unwrap();
    assert_eq!(storage.get_item("k").unwrap(), None);

    // Removing a missing key is fine
    storage.remove_item("k").unwrap();
}

#[test]
fn test_store_reads_value_written_by_hand() {
    let (temp_file, mut storage) = create_test_storage();
    let json = r#"[
        {"id":2,"text":"Second","description":"","completed":false,"priority":"urgent",
         "day":"segunda","date":"2024-01-08","createdAt":"2024-01-07T12:00:00Z"},
        {"id":1,"text":"First","completed":true}
    ]"#;
    storage.set_item(TODOS_KEY, json).unwrap();
    drop(storage);

    let store = TaskStoreBuilder::new()
        .with_database_path(Some(temp_file.path()))
        .build()
        .unwrap();

    assert_eq!(store.all().len(), 2);
    assert_eq!(store.all()[0].text, "Second");
    assert_eq!(store.stats().completed, 1);
}
