//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use capsule_core::config::StoreConfig;
use capsule_core::error::AppError;
use capsule_core::result::AppResult;
use capsule_core::traits::store::{RecordKey, RecordStore};

/// Record store manager that wraps the configured provider.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner store provider.
    inner: Arc<dyn RecordStore>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    pub fn new(config: &StoreConfig) -> AppResult<Self> {
        let inner: Arc<dyn RecordStore> = match config.provider.as_str() {
            "firebase" => {
                info!("Initializing Firebase record store");
                Arc::new(crate::firebase::FirebaseStore::new(config)?)
            }
            "memory" => {
                info!("Initializing in-memory record store");
                Arc::new(crate::memory::MemoryStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: firebase, memory"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a store manager from an existing provider (for testing).
    pub fn from_provider(provider: Arc<dyn RecordStore>) -> Self {
        Self { inner: provider }
    }
}

#[async_trait]
impl RecordStore for StoreManager {
    async fn push(&self, collection: &str, record: &serde_json::Value) -> AppResult<RecordKey> {
        self.inner.push(collection, record).await
    }

    async fn delete(&self, collection: &str, key: &RecordKey) -> AppResult<()> {
        self.inner.delete(collection, key).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}
