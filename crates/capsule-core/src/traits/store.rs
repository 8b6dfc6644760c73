//! Record store capability trait for pluggable persistence backends.

use std::fmt;

use async_trait::async_trait;

use crate::result::AppResult;

/// Store-assigned unique key identifying one pushed record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecordKey(pub String);

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trait for record store backends.
///
/// Implementations exist for the Firebase Realtime Database REST API and an
/// in-memory store. Every `push` creates a new entry under a store-generated
/// unique key; records are never updated in place.
#[async_trait]
pub trait RecordStore: Send + Sync + fmt::Debug + 'static {
    /// Append a record to a collection under a newly generated key.
    async fn push(&self, collection: &str, record: &serde_json::Value) -> AppResult<RecordKey>;

    /// Delete a single record by key. Deleting an absent key is not an error.
    async fn delete(&self, collection: &str, key: &RecordKey) -> AppResult<()>;

    /// Check whether the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
