//! Mail capability trait for pluggable email transports.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// Envelope fields for a single outbound email.
///
/// `to`, `subject`, and `text` are passed through verbatim from the caller;
/// `from` is the configured sender identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailEnvelope {
    /// Sender address.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub text: String,
}

/// Opaque acknowledgement returned by the mail provider.
///
/// The contents are provider-specific and never interpreted by this system.
#[derive(Debug, Clone)]
pub struct DeliveryReceipt(pub String);

/// Trait for mail transports.
///
/// The production implementation lives in `capsule-mailer` (SMTP via lettre).
/// One invocation makes exactly one delivery attempt; no retry is performed
/// at this layer. Authentication, network, and recipient-rejection failures
/// are all surfaced uniformly as a mail error.
#[async_trait]
pub trait Mailer: Send + Sync + std::fmt::Debug + 'static {
    /// Dispatch a single email and await the provider's acknowledgement.
    async fn send_mail(&self, envelope: &MailEnvelope) -> AppResult<DeliveryReceipt>;
}
