//! File I/O utilities with atomic writes
//!
//! Whole-file JSON reads and writes for the key-value store. A write either
//! lands completely or leaves the previous file in place.

use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BudgetError;

/// Storage error naming the file and the step that failed
fn storage_error(step: &str, path: &Path, e: impl std::fmt::Display) -> BudgetError {
    BudgetError::Storage(format!("Failed to {} {}: {}", step, path.display(), e))
}

/// Read JSON from a file, returning a default value if file doesn't exist
///
/// Content that is not valid JSON for `T` is a [`BudgetError::StorageParse`]
/// keyed by the file path, so callers can choose to recover from it.
pub fn read_json<T, P>(path: P) -> Result<T, BudgetError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| storage_error("open", path, e))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| BudgetError::StorageParse {
        key: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Replace `path` with the JSON encoding of `data`
///
/// The value is encoded in memory first, so an unencodable value never
/// touches the disk. The bytes then go to a sibling `.tmp` file that is
/// synced and renamed over `path`; readers see the old file or the new one.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BudgetError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = serde_json::to_vec_pretty(data).map_err(|e| storage_error("encode", path, e))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("create directory for", path, e))?;
    }

    let temp_path = path.with_extension("json.tmp");
    let written = File::create(&temp_path).and_then(|mut file| {
        file.write_all(&bytes)?;
        file.sync_all()
    });

    if let Err(e) = written.and_then(|()| fs::rename(&temp_path, path)) {
        let _ = fs::remove_file(&temp_path);
        return Err(storage_error("write", path, e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let data: TestData = read_json(&path).unwrap();
        assert_eq!(data, TestData::default());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        write_json_atomic(&path, &data).unwrap();
        let loaded: TestData = read_json(&path).unwrap();
        assert_eq!(data, loaded);
        assert!(!temp_dir.path().join("test.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &TestData::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_invalid_json_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<TestData, _>(&path).unwrap_err();
        assert!(matches!(err, BudgetError::StorageParse { .. }));
    }

    #[test]
    fn test_unencodable_value_leaves_file_untouched() {
        use std::collections::HashMap;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        write_json_atomic(&path, &TestData::default()).unwrap();

        // JSON object keys must be strings
        let bad: HashMap<(i32, i32), i32> = [((1, 2), 3)].into_iter().collect();
        let err = write_json_atomic(&path, &bad).unwrap_err();

        assert!(err.to_string().contains("store.json"));
        assert!(!temp_dir.path().join("store.json.tmp").exists());
        let kept: TestData = read_json(&path).unwrap();
        assert_eq!(kept, TestData::default());
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &TestData::default()).unwrap();
        let newer = TestData {
            name: "newer".into(),
            value: 7,
        };
        write_json_atomic(&path, &newer).unwrap();

        assert_eq!(read_json::<TestData, _>(&path).unwrap(), newer);
    }
}
