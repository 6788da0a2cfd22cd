use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::{ExpenseError, Result};
use crate::expense::{ExpenseRecord, ExpenseStore};

use super::StorageBackend;

/// Default backing file, resolved relative to the working directory. The
/// `.txt` extension is historical; the content is JSON.
pub const DEFAULT_BACKING_FILE: &str = "expenses.txt";

const TMP_SUFFIX: &str = "tmp";

/// JSON-backed storage bound to a single backing file.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn new_default() -> Self {
        Self::new(DEFAULT_BACKING_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn corrupt(&self, detail: impl Into<String>) -> ExpenseError {
        ExpenseError::StorageCorrupt {
            path: self.path.clone(),
            detail: detail.into(),
        }
    }

    fn write_failed(&self, source: std::io::Error) -> ExpenseError {
        ExpenseError::StorageWrite {
            path: self.path.clone(),
            source,
        }
    }
}

impl StorageBackend for JsonStorage {
    /// Reads the full record list from the backing file. A missing file is
    /// not an error: an empty valid file is created so later saves succeed,
    /// and an empty store is returned.
    fn load(&self) -> Result<ExpenseStore> {
        if !self.path.exists() {
            write_atomic(&self.path, "[]").map_err(|err| self.write_failed(err))?;
            tracing::info!(path = %self.path.display(), "created empty backing file");
            return Ok(ExpenseStore::new());
        }

        let data = fs::read_to_string(&self.path)
            .map_err(|err| self.corrupt(err.to_string()))?;
        let records: Vec<ExpenseRecord> =
            serde_json::from_str(&data).map_err(|err| self.corrupt(err.to_string()))?;

        // The file format promises amount >= 0; anything else is corruption,
        // not user input to re-prompt for.
        for (position, record) in records.iter().enumerate() {
            if !record.amount.is_finite() || record.amount < 0.0 {
                return Err(self.corrupt(format!(
                    "record {} has invalid amount {}",
                    position + 1,
                    record.amount
                )));
            }
        }

        tracing::info!(
            path = %self.path.display(),
            records = records.len(),
            "loaded expense store"
        );
        Ok(ExpenseStore::from(records))
    }

    /// Serializes the full store and replaces the backing file content. The
    /// write goes to a sibling temp file first and is renamed over the
    /// target, so a failed save leaves the previous content intact.
    fn save(&self, store: &ExpenseStore) -> Result<()> {
        let json = serde_json::to_string_pretty(store.records())
            .map_err(|err| self.corrupt(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json).map_err(|err| self.write_failed(err))?;
        fs::rename(&tmp, &self.path).map_err(|err| self.write_failed(err))?;

        tracing::info!(
            path = %self.path.display(),
            records = store.len(),
            "saved expense store"
        );
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_in_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(temp.path().join("expenses.txt"));
        (storage, temp)
    }

    fn sample_store() -> ExpenseStore {
        ExpenseStore::from(vec![ExpenseRecord {
            date: "2024-03-01".into(),
            description: "Coffee".into(),
            category: "Food".into(),
            amount: 4.5,
        }])
    }

    #[test]
    fn load_of_missing_file_creates_empty_backing_file() {
        let (storage, _guard) = storage_in_temp_dir();
        let store = storage.load().expect("load missing file");
        assert!(store.is_empty());

        let written = fs::read_to_string(storage.path()).expect("backing file exists");
        assert_eq!(written, "[]");
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_in_temp_dir();
        let store = sample_store();
        storage.save(&store).expect("save store");
        let loaded = storage.load().expect("load store");
        assert_eq!(loaded, store);
    }

    #[test]
    fn load_rejects_unparseable_content() {
        let (storage, _guard) = storage_in_temp_dir();
        fs::write(storage.path(), "not json at all").unwrap();
        let err = storage.load().unwrap_err();
        assert!(matches!(err, ExpenseError::StorageCorrupt { .. }));
    }

    #[test]
    fn load_rejects_records_missing_fields() {
        let (storage, _guard) = storage_in_temp_dir();
        fs::write(storage.path(), r#"[{"date": "2024-03-01"}]"#).unwrap();
        let err = storage.load().unwrap_err();
        assert!(matches!(err, ExpenseError::StorageCorrupt { .. }));
    }

    #[test]
    fn load_rejects_negative_amount() {
        let (storage, _guard) = storage_in_temp_dir();
        fs::write(
            storage.path(),
            r#"[{"date": "2024-03-01", "description": "x", "category": "y", "amount": -1.0}]"#,
        )
        .unwrap();
        let err = storage.load().unwrap_err();
        assert!(matches!(err, ExpenseError::StorageCorrupt { .. }));
    }

    #[test]
    fn failed_save_preserves_original_content() {
        let (storage, _guard) = storage_in_temp_dir();
        storage.save(&sample_store()).expect("initial save");
        let original = fs::read_to_string(storage.path()).unwrap();

        // A directory squatting on the temp path forces File::create to fail.
        fs::create_dir_all(tmp_path(storage.path())).unwrap();
        let mut changed = sample_store();
        changed.push(ExpenseRecord {
            date: "2024-03-02".into(),
            description: "Tea".into(),
            category: "Food".into(),
            amount: 3.0,
        });
        let err = storage.save(&changed).unwrap_err();
        assert!(matches!(err, ExpenseError::StorageWrite { .. }));

        let current = fs::read_to_string(storage.path()).unwrap();
        assert_eq!(current, original);
    }
}
