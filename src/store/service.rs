//! Write coordinator and read façade
//!
//! All operations are single-record and non-transactional. Update is a
//! two-step sequence (merge-write, read, normalize-rewrite) with no
//! conditional-write primitive underneath: a concurrent reader between the
//! two writes can observe a partially-normalized record, and two racing
//! updates are last-write-wins on the rewrite.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use crate::observability::Logger;
use crate::storage::DocumentStore;

use super::errors::{StoreError, StoreResult};
use super::normalize::normalize;
use super::record::{StoreDraft, StoreRecord};
use super::validate::validate;

/// Fixed page size for fetch-all and filter queries.
pub const FETCH_LIMIT: usize = 1000;

/// Fields a partial update may never overwrite: the storage key is
/// immutable and `created_at` is stamped once at create.
const PROTECTED_FIELDS: [&str; 2] = ["key", "created_at"];

/// Store operations over one injected storage collaborator.
pub struct StoreService<S: DocumentStore> {
    base: Arc<S>,
}

impl<S: DocumentStore> StoreService<S> {
    pub fn new(base: Arc<S>) -> Self {
        Self { base }
    }

    /// Validate, clamp, normalize, stamp, persist. The collaborator assigns
    /// the key; the record is returned as stored.
    pub async fn create(&self, draft: StoreDraft) -> StoreResult<StoreRecord> {
        validate(&draft)?;

        let record = normalize(StoreRecord::from_draft(draft, Utc::now()));
        let stored = self.base.put(serde_json::to_value(&record)?).await?;
        let record: StoreRecord = serde_json::from_value(stored)?;

        Logger::info("store_created", &[("key", &record.key)]);
        Ok(record)
    }

    /// Merge the raw partial document, then re-read, re-normalize, re-stamp
    /// `updated_at`, and write the full record back. Returns the final
    /// stored record. Not atomic; see the module doc.
    pub async fn update(&self, id: &str, mut patch: Value) -> StoreResult<StoreRecord> {
        if let Some(obj) = patch.as_object_mut() {
            for field in PROTECTED_FIELDS {
                obj.remove(field);
            }
        }

        // First write: raw merge of whatever fields the client sent.
        self.base
            .update(id, patch)
            .await
            .map_err(|_| StoreError::InvalidUpdate)?;

        let merged = self.base.get(id).await?.ok_or(StoreError::NotFound)?;
        let mut record: StoreRecord = serde_json::from_value(merged)?;
        record = normalize(record);
        record.number = record.number.max(0);
        record.updated_at = Utc::now();

        // Second write: the full normalized record, key left alone.
        let mut document = serde_json::to_value(&record)?;
        if let Some(obj) = document.as_object_mut() {
            obj.remove("key");
        }
        self.base
            .update(id, document)
            .await
            .map_err(|_| StoreError::InvalidUpdate)?;

        let stored = self.base.get(id).await?.ok_or(StoreError::NotFound)?;
        let record: StoreRecord = serde_json::from_value(stored)?;

        Logger::info("store_updated", &[("key", id)]);
        Ok(record)
    }

    /// Delete and confirm by reading the id back. A read-back that still
    /// finds the record is an unexpected state, reported rather than
    /// silently ignored.
    pub async fn delete(&self, id: &str) -> StoreResult<String> {
        self.base.delete(id).await?;

        match self.base.get(id).await? {
            None => {
                Logger::info("store_deleted", &[("key", id)]);
                Ok(format!("Store {} is deleted", id))
            }
            Some(_) => {
                Logger::error("store_delete_incomplete", &[("key", id)]);
                Err(StoreError::UnexpectedState(id.to_string()))
            }
        }
    }

    /// All records, up to the fixed page size.
    pub async fn get_all(&self) -> StoreResult<Vec<StoreRecord>> {
        let items = self.base.fetch(None, FETCH_LIMIT).await?;
        items
            .into_iter()
            .map(|item| Ok(serde_json::from_value(item)?))
            .collect()
    }

    /// Equality filter on country. The parameter is upper-cased to match
    /// the stored, normalized form.
    pub async fn get_by_country(&self, country: &str) -> StoreResult<Vec<StoreRecord>> {
        let query = serde_json::json!({ "country": country.to_uppercase() });
        let items = self.base.fetch(Some(query), FETCH_LIMIT).await?;
        items
            .into_iter()
            .map(|item| Ok(serde_json::from_value(item)?))
            .collect()
    }

    /// Point lookup; an absent id is a `NotFound`, not a failure.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<StoreRecord> {
        let item = self.base.get(id).await?.ok_or(StoreError::NotFound)?;
        Ok(serde_json::from_value(item)?)
    }
}
