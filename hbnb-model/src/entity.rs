//! The entity contract: identity, timestamps, attributes and the persisted mapping.

use crate::{ModelError, ModelResult, ModelSchema};
use hbnb_types::{ObjectId, Timestamp};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Discriminator key naming an entity's class in its serialized mapping.
pub const CLASS_KEY: &str = "__class__";
pub const ID_KEY: &str = "id";
pub const CREATED_AT_KEY: &str = "created_at";
pub const UPDATED_AT_KEY: &str = "updated_at";

const RESERVED: [&str; 4] = [CLASS_KEY, ID_KEY, CREATED_AT_KEY, UPDATED_AT_KEY];

/// Builds the storage key `"{ClassName}.{id}"`.
pub fn composite_key(class_name: &str, id: &ObjectId) -> String {
    format!("{class_name}.{id}")
}

/// A stored object: identity, lifecycle timestamps and free-form attributes.
///
/// The class is given by the entity's [`ModelSchema`]; attributes not set on
/// the instance fall back to the schema's declared defaults when read with
/// [`Entity::get`].
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    schema: Arc<ModelSchema>,
    id: ObjectId,
    created_at: Timestamp,
    updated_at: Timestamp,
    attributes: Map<String, Value>,
}

impl Entity {
    /// Creates an entity with a fresh identity; `created_at == updated_at`.
    pub fn new(schema: Arc<ModelSchema>) -> Self {
        let now = Timestamp::now();
        Self {
            schema,
            id: ObjectId::new(),
            created_at: now,
            updated_at: now,
            attributes: Map::new(),
        }
    }

    /// Rebuilds an entity from a mapping produced by [`Entity::to_mapping`].
    ///
    /// `id`, `created_at` and `updated_at` are required. Keys other than the
    /// reserved ones become instance attributes unchecked.
    pub fn from_persisted(
        schema: Arc<ModelSchema>,
        mapping: &Map<String, Value>,
    ) -> ModelResult<Self> {
        let mut id = None;
        let mut created_at = None;
        let mut updated_at = None;
        let mut attributes = Map::new();

        for (key, value) in mapping {
            match key.as_str() {
                CLASS_KEY => {
                    if value.as_str() != Some(schema.class_name.as_str()) {
                        return Err(ModelError::ClassMismatch {
                            expected: schema.class_name.clone(),
                            found: value.to_string(),
                        });
                    }
                }
                ID_KEY => {
                    let s = value.as_str().ok_or_else(|| ModelError::InvalidAttribute {
                        name: ID_KEY.into(),
                        reason: format!("expected a string, found {value}"),
                    })?;
                    id = Some(ObjectId::from_string(s));
                }
                CREATED_AT_KEY => created_at = Some(parse_timestamp(CREATED_AT_KEY, value)?),
                UPDATED_AT_KEY => updated_at = Some(parse_timestamp(UPDATED_AT_KEY, value)?),
                _ => {
                    attributes.insert(key.clone(), value.clone());
                }
            }
        }

        Ok(Self {
            schema,
            id: id.ok_or_else(|| ModelError::MissingAttribute(ID_KEY.into()))?,
            created_at: created_at
                .ok_or_else(|| ModelError::MissingAttribute(CREATED_AT_KEY.into()))?,
            updated_at: updated_at
                .ok_or_else(|| ModelError::MissingAttribute(UPDATED_AT_KEY.into()))?,
            attributes,
        })
    }

    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    pub fn class_name(&self) -> &str {
        &self.schema.class_name
    }

    pub fn schema(&self) -> &Arc<ModelSchema> {
        &self.schema
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// The key this entity is stored under.
    pub fn key(&self) -> String {
        composite_key(self.class_name(), &self.id)
    }

    /// Attributes set on this instance, excluding identity and timestamps.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Reads an attribute: base fields first, then the instance, then the
    /// class default. Timestamps are returned as ISO-8601 strings.
    pub fn get(&self, name: &str) -> Option<Value> {
        match name {
            ID_KEY => Some(Value::from(self.id.as_str())),
            CREATED_AT_KEY => Some(Value::from(self.created_at.to_iso_string())),
            UPDATED_AT_KEY => Some(Value::from(self.updated_at.to_iso_string())),
            CLASS_KEY => None,
            _ => self
                .attributes
                .get(name)
                .or_else(|| self.schema.default_for(name))
                .cloned(),
        }
    }

    /// Returns true if [`Entity::get`] would find a value.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Sets an instance attribute, returning the previous instance value.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> ModelResult<Option<Value>> {
        if RESERVED.contains(&name) {
            return Err(ModelError::ReservedAttribute(name.into()));
        }
        Ok(self.attributes.insert(name.into(), value.into()))
    }

    /// Removes an instance attribute; reads fall back to the class default.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.attributes.remove(name)
    }

    /// Refreshes `updated_at`. The new value is strictly greater than the old.
    pub fn touch(&mut self) {
        self.updated_at = self.updated_at.tick();
    }

    /// Serializes the instance: attributes, ISO-8601 timestamps and `__class__`.
    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut map = self.attributes.clone();
        map.insert(ID_KEY.into(), Value::from(self.id.as_str()));
        map.insert(CREATED_AT_KEY.into(), Value::from(self.created_at.to_iso_string()));
        map.insert(UPDATED_AT_KEY.into(), Value::from(self.updated_at.to_iso_string()));
        map.insert(CLASS_KEY.into(), Value::from(self.class_name()));
        map
    }
}

impl fmt::Display for Entity {
    /// `[ClassName] (id) {attributes}` with timestamps in native form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] ({}) {{{:?}: {:?}, {:?}: {:?}, {:?}: {:?}",
            self.class_name(),
            self.id,
            ID_KEY,
            self.id.as_str(),
            CREATED_AT_KEY,
            self.created_at,
            UPDATED_AT_KEY,
            self.updated_at,
        )?;
        for (key, value) in &self.attributes {
            write!(f, ", {key:?}: {value}")?;
        }
        f.write_str("}")
    }
}

fn parse_timestamp(name: &str, value: &Value) -> ModelResult<Timestamp> {
    let s = value.as_str().ok_or_else(|| ModelError::InvalidAttribute {
        name: name.into(),
        reason: format!("expected an ISO-8601 string, found {value}"),
    })?;
    Timestamp::parse(s).map_err(|source| ModelError::InvalidTimestamp {
        name: name.into(),
        source,
    })
}
