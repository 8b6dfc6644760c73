//! Capsule sharing configuration.

use serde::{Deserialize, Serialize};

/// Settings for the share-capsule pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Store collection that shared capsule records are pushed to.
    #[serde(default = "default_collection")]
    pub collection: String,
    /// When enabled, a failed notification triggers a best-effort delete of
    /// the record written in the same request. When disabled (the default),
    /// the record is left in place and the failure is logged.
    #[serde(default)]
    pub strict_reconciliation: bool,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            collection: default_collection(),
            strict_reconciliation: false,
        }
    }
}

fn default_collection() -> String {
    "sharedCapsules".to_string()
}
