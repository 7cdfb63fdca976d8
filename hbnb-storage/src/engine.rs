//! The file-backed storage engine.
//!
//! Every save rewrites the whole document: the table is serialized into a
//! sibling `*.tmp` file which is then renamed over the target.

use crate::format::to_spaced_vec;
use crate::{ClassRegistry, StorageConfig, StorageError, StorageResult};
use hbnb_model::{CLASS_KEY, Entity, FieldKind, composite_key};
use hbnb_types::ObjectId;
use serde_json::{Map, Value};
use std::collections::btree_map::{BTreeMap, Entry};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// In-memory table of live entities backed by one JSON document.
#[derive(Debug)]
pub struct FileStorage {
    config: StorageConfig,
    registry: ClassRegistry,
    objects: BTreeMap<String, Entity>,
}

impl FileStorage {
    /// Creates an empty storage; nothing is read from disk.
    pub fn new(config: StorageConfig, registry: ClassRegistry) -> Self {
        Self {
            config,
            registry,
            objects: BTreeMap::new(),
        }
    }

    /// Creates a storage and loads the configured document, if any.
    pub fn open(config: StorageConfig, registry: ClassRegistry) -> StorageResult<Self> {
        let mut storage = Self::new(config, registry);
        storage.reload()?;
        Ok(storage)
    }

    pub fn file_path(&self) -> &Path {
        self.config.file_path()
    }

    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    /// Registered class names.
    pub fn classes(&self) -> Vec<&str> {
        self.registry.class_names()
    }

    /// The live table, keyed by `"{ClassName}.{id}"`.
    pub fn all(&self) -> &BTreeMap<String, Entity> {
        &self.objects
    }

    /// Live entities of one class, in key order.
    pub fn all_of(&self, class_name: &str) -> Vec<&Entity> {
        self.objects
            .values()
            .filter(|e| e.class_name() == class_name)
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&Entity> {
        self.objects.get(key)
    }

    /// Mutable access for attribute edits. Replacing the entity with one of a
    /// different class or id makes the next [`FileStorage::save`] fail.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Entity> {
        self.objects.get_mut(key)
    }

    pub fn find(&self, class_name: &str, id: &ObjectId) -> Option<&Entity> {
        self.objects.get(&composite_key(class_name, id))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn count(&self, class_name: &str) -> usize {
        self.objects
            .values()
            .filter(|e| e.class_name() == class_name)
            .count()
    }

    /// Adds an entity of a registered class to the table and returns its key.
    ///
    /// An entity with the same class and id replaces the stored one.
    pub fn new_object(&mut self, entity: Entity) -> StorageResult<String> {
        if !self.registry.contains(entity.class_name()) {
            return Err(StorageError::UnknownClass(entity.class_name().to_string()));
        }
        let key = entity.key();
        debug!(key = %key, "registering entity");
        self.objects.insert(key.clone(), entity);
        Ok(key)
    }

    /// Constructs a fresh entity of a registered class and adds it to the table.
    pub fn create(&mut self, class_name: &str) -> StorageResult<&mut Entity> {
        let schema = self
            .registry
            .get(class_name)
            .cloned()
            .ok_or_else(|| StorageError::UnknownClass(class_name.to_string()))?;
        let entity = Entity::new(schema);
        let key = entity.key();
        debug!(key = %key, "created entity");

        let slot = match self.objects.entry(key) {
            Entry::Vacant(vacant) => vacant.insert(entity),
            Entry::Occupied(mut occupied) => {
                occupied.insert(entity);
                occupied.into_mut()
            }
        };
        Ok(slot)
    }

    /// Builds the JSON document for the current table.
    ///
    /// Fails if an entry no longer sits under its own key (it was replaced
    /// through [`FileStorage::get_mut`]) or its class is not registered,
    /// since [`FileStorage::reload`] would refuse such a document.
    pub fn to_document(&self) -> StorageResult<Map<String, Value>> {
        let mut document = Map::new();
        for (key, entity) in &self.objects {
            if !self.registry.contains(entity.class_name()) {
                warn!(
                    key = %key,
                    class_name = entity.class_name(),
                    "refusing to save unregistered class"
                );
                return Err(StorageError::UnknownClass(entity.class_name().to_string()));
            }
            let actual = entity.key();
            if actual != *key {
                warn!(key = %key, actual = %actual, "refusing to save entity under a stale key");
                return Err(StorageError::KeyMismatch {
                    key: key.clone(),
                    actual,
                });
            }
            document.insert(key.clone(), Value::Object(entity.to_mapping()));
        }
        Ok(document)
    }

    /// Writes the whole table to the configured file, replacing its content.
    ///
    /// Nothing is written if the table fails [`FileStorage::to_document`].
    pub fn save(&self) -> StorageResult<()> {
        let bytes = to_spaced_vec(&self.to_document()?)?;
        let path = self.file_path();
        let tmp = tmp_path(path);
        std::fs::write(&tmp, &bytes)?;
        std::fs::rename(&tmp, path)?;
        info!(
            path = %path.display(),
            objects = self.objects.len(),
            bytes = bytes.len(),
            "saved storage file"
        );
        Ok(())
    }

    /// Refreshes the entity's `updated_at`, then saves the whole table.
    pub fn persist(&mut self, key: &str) -> StorageResult<()> {
        let entity = self
            .objects
            .get_mut(key)
            .ok_or_else(|| StorageError::NotFound(key.to_string()))?;
        entity.touch();
        debug!(key, updated_at = %entity.updated_at(), "touched entity");
        self.save()
    }

    /// Replaces the table with the content of the configured file.
    ///
    /// A missing file yields an empty table. On any error the current table
    /// is left untouched.
    pub fn reload(&mut self) -> StorageResult<()> {
        let path = self.config.file_path.clone();
        if !path.exists() {
            debug!(path = %path.display(), "no storage file, starting empty");
            self.objects.clear();
            return Ok(());
        }

        let bytes = std::fs::read(&path)?;
        let document: Value = serde_json::from_slice(&bytes)?;
        let Value::Object(entries) = document else {
            return Err(StorageError::MalformedDocument(
                "top-level value is not an object".into(),
            ));
        };

        let mut objects = BTreeMap::new();
        for (key, value) in entries {
            let entity = self.rebuild(&key, value)?;
            objects.insert(key, entity);
        }

        info!(path = %path.display(), objects = objects.len(), "loaded storage file");
        self.objects = objects;
        Ok(())
    }

    /// Declared attributes and their kinds for a registered class.
    pub fn attributes_schema(&self, class_name: &str) -> StorageResult<BTreeMap<String, FieldKind>> {
        self.registry
            .get(class_name)
            .map(|schema| schema.attributes())
            .ok_or_else(|| StorageError::UnknownClass(class_name.to_string()))
    }

    fn rebuild(&self, key: &str, value: Value) -> StorageResult<Entity> {
        let Value::Object(mapping) = value else {
            return Err(StorageError::MalformedDocument(format!(
                "entry {key} is not an object"
            )));
        };
        let class_name = mapping
            .get(CLASS_KEY)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                StorageError::MalformedDocument(format!("entry {key} has no string {CLASS_KEY}"))
            })?;
        let Some(schema) = self.registry.get(class_name).cloned() else {
            warn!(key, class_name, "refusing to load unregistered class");
            return Err(StorageError::UnknownClass(class_name.to_string()));
        };

        let entity =
            Entity::from_persisted(schema, &mapping).map_err(|source| StorageError::Model {
                key: key.to_string(),
                source,
            })?;
        let actual = entity.key();
        if actual != key {
            return Err(StorageError::KeyMismatch {
                key: key.to_string(),
                actual,
            });
        }
        Ok(entity)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
