//! Capsule domain types.
//!
//! Wire field names are preserved exactly as the client apps send them
//! (French camelCase, `creatorID` with a capital ID).

use serde::{Deserialize, Serialize};

/// A user-authored time capsule with a scheduled reveal time.
///
/// Supplied by the caller on share requests. Individual fields are defaulted
/// when absent; only the presence of the capsule object itself is validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capsule {
    /// Capsule message content.
    #[serde(default)]
    pub message: String,
    /// Scheduled reveal time, epoch milliseconds.
    #[serde(rename = "dateOuverture", default)]
    pub date_ouverture: i64,
    /// Whether the capsule has been opened.
    #[serde(rename = "estOuverte", default)]
    pub est_ouverte: bool,
    /// Sentiment metadata.
    #[serde(default)]
    pub sentiment: String,
    /// Identifier of the capsule's creator.
    #[serde(rename = "creatorID", default)]
    pub creator_id: String,
}

/// The record persisted when a capsule is shared.
///
/// Derived from a [`Capsule`] plus the sharing metadata. Written once under a
/// store-generated key and never updated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedCapsuleRecord {
    /// Capsule message content.
    pub message: String,
    /// Scheduled reveal time, epoch milliseconds.
    #[serde(rename = "dateOuverture")]
    pub date_ouverture: i64,
    /// Whether the capsule has been opened.
    #[serde(rename = "estOuverte")]
    pub est_ouverte: bool,
    /// Sentiment metadata.
    pub sentiment: String,
    /// Identifier of the capsule's creator.
    #[serde(rename = "creatorID")]
    pub creator_id: String,
    /// Always `true` on a shared record.
    #[serde(rename = "isShared")]
    pub is_shared: bool,
    /// Recipient addresses the capsule was shared with.
    #[serde(rename = "sharedWithEmails")]
    pub shared_with_emails: Vec<String>,
}

impl SharedCapsuleRecord {
    /// Build the shared record for a capsule and a single recipient.
    pub fn from_capsule(capsule: &Capsule, to_email: &str) -> Self {
        Self {
            message: capsule.message.clone(),
            date_ouverture: capsule.date_ouverture,
            est_ouverte: capsule.est_ouverte,
            sentiment: capsule.sentiment.clone(),
            creator_id: capsule.creator_id.clone(),
            is_shared: true,
            shared_with_emails: vec![to_email.to_string()],
        }
    }
}
