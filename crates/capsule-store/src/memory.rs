//! In-memory record store for development and tests.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use capsule_core::result::AppResult;
use capsule_core::traits::store::{RecordKey, RecordStore};

/// Record store holding all collections in process memory.
///
/// Keys are generated per push, so repeated identical writes produce
/// distinct records, matching the Firebase push semantics.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Map of collection name → ordered `(key, record)` entries.
    collections: DashMap<String, Vec<(String, serde_json::Value)>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a collection's `(key, record)` entries, in insertion order.
    pub fn records(&self, collection: &str) -> Vec<(String, serde_json::Value)> {
        self.collections
            .get(collection)
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Number of records in a collection.
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map(|entries| entries.len())
            .unwrap_or(0)
    }

    /// Whether a collection has no records.
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn push(&self, collection: &str, record: &serde_json::Value) -> AppResult<RecordKey> {
        let key = Uuid::new_v4().simple().to_string();
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push((key.clone(), record.clone()));
        Ok(RecordKey(key))
    }

    async fn delete(&self, collection: &str, key: &RecordKey) -> AppResult<()> {
        if let Some(mut entries) = self.collections.get_mut(collection) {
            entries.retain(|(k, _)| *k != key.0);
        }
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
