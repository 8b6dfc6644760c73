//! SMTP mail transport configuration.

use serde::{Deserialize, Serialize};

/// SMTP relay and sender identity configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// SMTP relay hostname.
    #[serde(default = "default_smtp_host")]
    pub host: String,
    /// SMTP relay port.
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    /// Username for SMTP authentication. Empty disables authentication.
    #[serde(default)]
    pub username: String,
    /// Password for SMTP authentication.
    #[serde(default)]
    pub password: String,
    /// Sender address used as the envelope `from`. Falls back to `username`.
    #[serde(default)]
    pub from: String,
}

impl MailConfig {
    /// The sender identity placed on every outbound envelope.
    pub fn sender(&self) -> &str {
        if self.from.is_empty() {
            &self.username
        } else {
            &self.from
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
            from: String::new(),
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}
