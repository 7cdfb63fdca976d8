//! Shared test helpers for storage tests.

#![allow(dead_code)]

use hbnb_storage::{ClassRegistry, FileStorage, StorageConfig};
use std::path::PathBuf;
use tempfile::TempDir;

/// Returns a temp dir and the storage file path inside it.
pub fn temp_store_path() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("file.json");
    (dir, path)
}

/// Empty storage over a fresh temp file with the built-in classes registered.
pub fn temp_storage() -> (TempDir, FileStorage) {
    let (dir, path) = temp_store_path();
    let storage = FileStorage::new(StorageConfig::new(path), ClassRegistry::with_builtin_models());
    (dir, storage)
}

/// Opens a second storage over the same file, as a new process would.
pub fn reopen(storage: &FileStorage) -> FileStorage {
    FileStorage::open(
        StorageConfig::new(storage.file_path()),
        ClassRegistry::with_builtin_models(),
    )
    .unwrap()
}
