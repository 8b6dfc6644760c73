//! Record store configuration.

use serde::{Deserialize, Serialize};

/// Record store provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Provider: `"firebase"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Base URL of the Firebase Realtime Database
    /// (e.g. `https://<project>.firebaseio.com`).
    #[serde(default)]
    pub database_url: String,
    /// Database secret or ID token appended as the `auth` query parameter.
    #[serde(default)]
    pub auth: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            database_url: String::new(),
            auth: None,
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}
