//! Core value types for the HBnB object store.
//!
//! This crate defines the small, domain-agnostic types that every stored
//! object carries:
//! - Object identifiers (UUID v4 rendered as strings)
//! - Microsecond-precision local timestamps with ISO-8601 rendering
//!
//! Entity kinds and the storage engine live in `hbnb-model` and
//! `hbnb-storage`; nothing here knows about either.

mod ids;
mod timestamp;

pub use ids::ObjectId;
pub use timestamp::Timestamp;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
