//! JSON file storage engine for the HBnB object store.
//!
//! Keeps every live entity in memory and writes the whole table to a single
//! JSON document on save.
//!
//! # Architecture
//!
//! - Entities are keyed by `"{ClassName}.{id}"` in an ordered map, so two
//!   saves of the same table produce byte-identical files
//! - The document is one flat JSON object; each value is an entity's
//!   `to_mapping()` output carrying its `__class__` discriminator
//! - Save refuses a table it could not load back: every entry must sit under
//!   its own key and belong to a registered class
//! - Reload rebuilds entities through a [`ClassRegistry`] of known classes and
//!   refuses any class it does not know

mod config;
mod engine;
mod error;
mod format;
mod registry;

pub use config::{DEFAULT_FILE_PATH, STORAGE_PATH_ENV, StorageConfig};
pub use engine::FileStorage;
pub use error::{StorageError, StorageResult};
pub use registry::ClassRegistry;
