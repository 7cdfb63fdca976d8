//! Error types for the storage layer.

use hbnb_model::ModelError;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON, or could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An entry could not be rebuilt into an entity.
    #[error("invalid entity {key}: {source}")]
    Model {
        key: String,
        #[source]
        source: ModelError,
    },

    /// The class name is not in the registry.
    #[error("unknown class: {0}")]
    UnknownClass(String),

    /// Valid JSON that does not have the document's shape.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// An entry's key disagrees with its class and id.
    #[error("key mismatch: entry stored under {key} rebuilds as {actual}")]
    KeyMismatch { key: String, actual: String },

    /// Entity not found.
    #[error("entity not found: {0}")]
    NotFound(String),
}
