//! Error types for entity construction and mutation.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while building or mutating an entity.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A persisted mapping lacks a required attribute.
    #[error("missing required attribute: {0}")]
    MissingAttribute(String),

    /// An attribute has the wrong JSON type.
    #[error("invalid attribute {name}: {reason}")]
    InvalidAttribute { name: String, reason: String },

    /// A timestamp attribute could not be parsed.
    #[error("invalid timestamp for {name}: {source}")]
    InvalidTimestamp {
        name: String,
        #[source]
        source: hbnb_types::Error,
    },

    /// The attribute is managed by the entity itself and cannot be set.
    #[error("attribute {0} is reserved")]
    ReservedAttribute(String),

    /// The mapping's class discriminator names a different class.
    #[error("class mismatch: expected {expected}, found {found}")]
    ClassMismatch { expected: String, found: String },
}
