use crate::entity::{CREATED_AT_KEY, Entity, ID_KEY, UPDATED_AT_KEY};
use hbnb_types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Describes an entity class: its name and its class-level attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSchema {
    pub class_name: String,
    pub fields: Vec<FieldSpec>,
}

impl ModelSchema {
    /// Creates a schema with no declared fields beyond the base ones.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a declared field.
    #[must_use]
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Looks up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Class-level default for a declared field.
    pub fn default_for(&self, name: &str) -> Option<&Value> {
        self.field(name).map(|f| &f.default)
    }

    /// Attribute names and their expected kinds, base fields included.
    pub fn attributes(&self) -> BTreeMap<String, FieldKind> {
        let mut attrs = BTreeMap::from([
            (ID_KEY.to_string(), FieldKind::Text),
            (CREATED_AT_KEY.to_string(), FieldKind::DateTime),
            (UPDATED_AT_KEY.to_string(), FieldKind::DateTime),
        ]);
        for field in &self.fields {
            attrs.insert(field.name.clone(), field.kind);
        }
        attrs
    }

    /// Returns the names of declared attributes whose current value on
    /// `entity` is missing or does not match the declared kind.
    pub fn validate(&self, entity: &Entity) -> Vec<String> {
        self.attributes()
            .into_iter()
            .filter(|(name, kind)| !entity.get(name).is_some_and(|v| kind.matches(&v)))
            .map(|(name, _)| name)
            .collect()
    }
}

/// A class-level attribute declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    /// Value seen by readers until the instance sets its own.
    pub default: Value,
}

impl FieldSpec {
    /// A field with the kind's natural default.
    pub fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: kind.default_value(),
        }
    }

    /// Shorthand for a text field defaulting to `""`.
    pub fn text(name: &str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// Shorthand for an integer field defaulting to `0`.
    pub fn integer(name: &str) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    /// Shorthand for a float field defaulting to `0.0`.
    pub fn float(name: &str) -> Self {
        Self::new(name, FieldKind::Float)
    }

    /// Shorthand for a boolean field defaulting to `false`.
    pub fn bool(name: &str) -> Self {
        Self::new(name, FieldKind::Bool)
    }

    /// Shorthand for a list field defaulting to `[]`.
    pub fn list(name: &str) -> Self {
        Self::new(name, FieldKind::List)
    }

    /// Overrides the default value.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = default.into();
        self
    }
}

/// The value kind of a declared attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    Bool,
    /// ISO-8601 string as produced by [`Timestamp::to_iso_string`].
    DateTime,
    List,
}

impl FieldKind {
    /// Returns true if `value` is of this kind. Integers count as floats.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::Text => value.is_string(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Float => value.is_number(),
            Self::Bool => value.is_boolean(),
            Self::DateTime => value.as_str().is_some_and(|s| Timestamp::parse(s).is_ok()),
            Self::List => value.is_array(),
        }
    }

    /// The zero value for this kind.
    pub fn default_value(self) -> Value {
        match self {
            Self::Text => Value::from(""),
            Self::Integer => Value::from(0),
            Self::Float => Value::from(0.0),
            Self::Bool => Value::Bool(false),
            Self::DateTime => Value::Null,
            Self::List => Value::Array(Vec::new()),
        }
    }
}
