use hbnb_model::{ModelSchema, kinds};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Known entity classes, keyed by class name.
///
/// Only classes registered here can be rebuilt from a persisted document.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: BTreeMap<String, Arc<ModelSchema>>,
}

impl ClassRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in class.
    pub fn with_builtin_models() -> Self {
        let mut registry = Self::new();
        for schema in kinds::builtin_schemas() {
            registry.register(schema);
        }
        registry
    }

    /// Registers a class, replacing any previous schema with the same name.
    pub fn register(&mut self, schema: ModelSchema) -> Arc<ModelSchema> {
        let schema = Arc::new(schema);
        self.classes.insert(schema.class_name.clone(), schema.clone());
        schema
    }

    pub fn get(&self, class_name: &str) -> Option<&Arc<ModelSchema>> {
        self.classes.get(class_name)
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.classes.contains_key(class_name)
    }

    /// Registered class names in sorted order.
    pub fn class_names(&self) -> Vec<&str> {
        self.classes.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
