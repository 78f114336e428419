//! File I/O utilities with atomic writes
//!
//! The record store is a single JSON document; it is rewritten through a
//! temp file and a rename so a crash never leaves a half-written store.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FintrackError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, FintrackError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| FintrackError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| FintrackError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), FintrackError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            FintrackError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| FintrackError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| FintrackError::Storage(format!("Failed to serialize records: {}", e)))?;

    writer
        .flush()
        .map_err(|e| FintrackError::Storage(format!("Failed to flush records: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| FintrackError::Storage(format!("Failed to sync records: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        FintrackError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Snapshot {
        next_id: i64,
        tables: BTreeMap<String, Vec<String>>,
    }

    fn snapshot() -> Snapshot {
        let mut tables = BTreeMap::new();
        tables.insert("bills_c".to_string(), vec!["Rent".to_string()]);
        Snapshot { next_id: 2, tables }
    }

    #[test]
    fn test_missing_file_reads_as_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded: Snapshot = read_json(temp_dir.path().join("records.json")).unwrap();
        assert_eq!(loaded, Snapshot::default());
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("records.json");

        write_json_atomic(&path, &snapshot()).unwrap();
        assert!(!temp_dir.path().join("data").join("records.json.tmp").exists());

        let loaded: Snapshot = read_json(&path).unwrap();
        assert_eq!(loaded, snapshot());
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_json::<Snapshot, _>(&path).unwrap_err();
        assert!(matches!(err, FintrackError::Storage(_)));
    }
}
