//! Entity model for the HBnB object store.
//!
//! Defines the types every stored object flows through:
//! - [`Entity`] — identity, timestamps and a free-form attribute bag
//! - [`ModelSchema`] — a class name plus its declared attributes and defaults
//! - [`FieldKind`] / [`FieldSpec`] — the declared kind and default of one attribute
//! - [`kinds`] — the built-in entity classes (`BaseModel`, `User`, `City`, ...)
//!
//! Entity classes carry no behavior of their own: a `City` is an [`Entity`]
//! whose schema is [`kinds::city`]. The storage engine picks the schema by
//! class name when rebuilding objects from disk.

mod entity;
mod error;
pub mod kinds;
mod schema;

pub use entity::{CLASS_KEY, CREATED_AT_KEY, Entity, ID_KEY, UPDATED_AT_KEY, composite_key};
pub use error::{ModelError, ModelResult};
pub use schema::{FieldKind, FieldSpec, ModelSchema};
