//! Firebase Realtime Database record store over the REST API.
//!
//! A `POST` to `{base}/{collection}.json` creates a new child under a
//! server-generated push key and returns it as `{"name": key}`. A `DELETE`
//! to `{base}/{collection}/{key}.json` removes one child and succeeds even
//! when the key is absent.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use capsule_core::config::StoreConfig;
use capsule_core::error::AppError;
use capsule_core::result::AppResult;
use capsule_core::traits::store::{RecordKey, RecordStore};

/// Record store backed by a Firebase Realtime Database instance.
#[derive(Debug, Clone)]
pub struct FirebaseStore {
    /// Shared HTTP client.
    client: reqwest::Client,
    /// Database base URL without trailing slash.
    base_url: String,
    /// Optional database secret or ID token.
    auth: Option<String>,
}

/// Body returned by the RTDB REST API on a push write.
#[derive(Debug, Deserialize)]
struct PushResponse {
    name: String,
}

impl FirebaseStore {
    /// Create a store from configuration.
    pub fn new(config: &StoreConfig) -> AppResult<Self> {
        if config.database_url.is_empty() {
            return Err(AppError::configuration(
                "store.database_url is required for the firebase provider",
            ));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: config.database_url.trim_end_matches('/').to_string(),
            auth: config.auth.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        match &self.auth {
            Some(token) => format!("{}/{path}.json?auth={token}", self.base_url),
            None => format!("{}/{path}.json", self.base_url),
        }
    }
}

#[async_trait]
impl RecordStore for FirebaseStore {
    async fn push(&self, collection: &str, record: &serde_json::Value) -> AppResult<RecordKey> {
        let response = self
            .client
            .post(self.url(collection))
            .json(record)
            .send()
            .await
            .map_err(|e| AppError::store(format!("Firebase request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::store(format!(
                "Firebase write to '{collection}' failed with status {status}"
            )));
        }

        let body: PushResponse = response
            .json()
            .await
            .map_err(|e| AppError::store(format!("Invalid Firebase push response: {e}")))?;

        debug!(collection, key = %body.name, "Record pushed");
        Ok(RecordKey(body.name))
    }

    async fn delete(&self, collection: &str, key: &RecordKey) -> AppResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("{collection}/{key}")))
            .send()
            .await
            .map_err(|e| AppError::store(format!("Firebase request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::store(format!(
                "Firebase delete of '{collection}/{key}' failed with status {status}"
            )));
        }

        debug!(collection, %key, "Record deleted");
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        let url = match &self.auth {
            Some(token) => format!("{}/.json?shallow=true&auth={token}", self.base_url),
            None => format!("{}/.json?shallow=true", self.base_url),
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::store(format!("Firebase request failed: {e}")))?;

        Ok(response.status().is_success())
    }
}
