//! Storage configuration.

use std::path::{Path, PathBuf};

/// Environment variable overriding the storage file path.
pub const STORAGE_PATH_ENV: &str = "HBNB_STORAGE_PATH";

/// Storage file used when nothing else is configured.
pub const DEFAULT_FILE_PATH: &str = "file.json";

/// Where the storage engine keeps its document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub file_path: PathBuf,
}

impl StorageConfig {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Reads `HBNB_STORAGE_PATH`, falling back to [`DEFAULT_FILE_PATH`].
    pub fn from_env() -> Self {
        match std::env::var(STORAGE_PATH_ENV) {
            Ok(path) if !path.is_empty() => Self::new(path),
            _ => Self::default(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_PATH)
    }
}
