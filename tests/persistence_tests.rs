use expense_core::errors::ExpenseError;
use expense_core::expense::{ExpenseRecord, ExpenseStore};
use expense_core::storage::{JsonStorage, StorageBackend};
use std::fs;
use tempfile::tempdir;

fn record(date: &str, description: &str, category: &str, amount: &str) -> ExpenseRecord {
    ExpenseRecord::new(date, description, category, amount).expect("valid record")
}

#[test]
fn roundtrip_preserves_records_and_order() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(temp.path().join("expenses.txt"));

    let store = ExpenseStore::from(vec![
        record("2024-01-05", "lunch", "food", "10.00"),
        record("2024-01-20", "bus", "transport", "2.50"),
        record("2024-01-20", "bus", "transport", "2.50"),
        record("2024-02-01", "rent", "housing", "500.00"),
    ]);

    storage.save(&store).expect("save");
    let loaded = storage.load().expect("load");
    assert_eq!(loaded, store);
}

#[test]
fn loading_nonexistent_file_creates_empty_valid_backing_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("expenses.txt");
    let storage = JsonStorage::new(&path);

    let store = storage.load().expect("load missing file");
    assert!(store.is_empty());
    assert!(path.exists(), "backing file should be created");

    // The created file must itself be loadable.
    let reloaded = storage.load().expect("reload created file");
    assert!(reloaded.is_empty());
}

#[test]
fn backing_file_uses_the_documented_wire_shape() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(temp.path().join("expenses.txt"));
    let store = ExpenseStore::from(vec![record("2024-03-01", "Coffee", "Food", "4.50")]);
    storage.save(&store).expect("save");

    let raw = fs::read_to_string(storage.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let list = value.as_array().expect("top-level list");
    assert_eq!(list.len(), 1);
    let entry = list[0].as_object().expect("record object");
    assert_eq!(entry.len(), 4);
    assert_eq!(entry["date"], "2024-03-01");
    assert_eq!(entry["description"], "Coffee");
    assert_eq!(entry["category"], "Food");
    assert_eq!(entry["amount"], 4.5);
}

#[test]
fn corrupt_content_fails_the_load() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(temp.path().join("expenses.txt"));
    fs::write(storage.path(), "{\"oops\": true}").unwrap();

    let err = storage.load().unwrap_err();
    assert!(matches!(err, ExpenseError::StorageCorrupt { .. }));
}

#[test]
fn save_overwrites_rather_than_appends() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(temp.path().join("expenses.txt"));

    let big = ExpenseStore::from(vec![
        record("2024-01-05", "lunch", "food", "10.00"),
        record("2024-01-20", "bus", "transport", "2.50"),
    ]);
    storage.save(&big).expect("first save");

    let small = ExpenseStore::from(vec![record("2024-02-01", "rent", "housing", "500.00")]);
    storage.save(&small).expect("second save");

    let loaded = storage.load().expect("load");
    assert_eq!(loaded, small);
}
