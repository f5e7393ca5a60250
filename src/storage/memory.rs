//! In-memory `DocumentStore` for tests
//!
//! Mirrors the hosted item API closely enough for the write path to be
//! exercised without a network: opaque key assignment on put, merge
//! semantics on update, equality queries on fetch.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use super::base::DocumentStore;
use super::errors::{StorageError, StorageResult};

/// In-memory document store.
#[derive(Debug, Default)]
pub struct MemoryBase {
    items: RwLock<HashMap<String, Value>>,
}

impl MemoryBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items (test assertions).
    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// All fields of the equality query object must match the item.
fn matches_query(item: &Value, query: &Value) -> bool {
    match query.as_object() {
        Some(fields) => fields.iter().all(|(k, v)| item.get(k) == Some(v)),
        None => false,
    }
}

#[async_trait]
impl DocumentStore for MemoryBase {
    async fn put(&self, mut item: Value) -> StorageResult<Value> {
        let mut items = self.items.write().map_err(|_| StorageError::LockPoisoned)?;

        let key = match item.get("key").and_then(Value::as_str) {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => Uuid::new_v4().simple().to_string(),
        };
        if let Some(obj) = item.as_object_mut() {
            obj.insert("key".to_string(), Value::String(key.clone()));
        }

        items.insert(key, item.clone());
        Ok(item)
    }

    async fn get(&self, key: &str) -> StorageResult<Option<Value>> {
        let items = self.items.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(items.get(key).cloned())
    }

    async fn update(&self, key: &str, patch: Value) -> StorageResult<()> {
        let mut items = self.items.write().map_err(|_| StorageError::LockPoisoned)?;

        let item = items
            .get_mut(key)
            .ok_or_else(|| StorageError::KeyNotFound(key.to_string()))?;

        if let (Some(obj), Some(patch_obj)) = (item.as_object_mut(), patch.as_object()) {
            for (k, v) in patch_obj {
                obj.insert(k.clone(), v.clone());
            }
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let mut items = self.items.write().map_err(|_| StorageError::LockPoisoned)?;
        items.remove(key);
        Ok(())
    }

    async fn fetch(&self, query: Option<Value>, limit: usize) -> StorageResult<Vec<Value>> {
        let items = self.items.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(items
            .values()
            .filter(|item| match &query {
                Some(q) => matches_query(item, q),
                None => true,
            })
            .take(limit)
            .cloned()
            .collect())
    }
}
