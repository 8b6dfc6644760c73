//! Share pipeline: validate, persist the shared record, notify the
//! recipient, and reconcile partial failure between the two effects.

use std::sync::Arc;

use tracing::{error, info, warn};

use capsule_core::config::ShareConfig;
use capsule_core::error::AppError;
use capsule_core::result::AppResult;
use capsule_core::traits::mailer::{DeliveryReceipt, MailEnvelope, Mailer};
use capsule_core::traits::store::{RecordKey, RecordStore};
use capsule_core::types::{Capsule, SharedCapsuleRecord};

use super::notify;

/// Validation message when `capsule` or `toEmail` is absent.
pub const SHARE_FIELDS_REQUIRED: &str = r#"Les champs "capsule" et "toEmail" sont requis"#;
/// Generic failure message for any effect failure in the share pipeline.
pub const SHARE_FAILED: &str = "Erreur lors du partage de la capsule";

/// Request to share a capsule with a recipient.
#[derive(Debug, Clone, Default)]
pub struct ShareCapsuleRequest {
    /// The capsule being shared.
    pub capsule: Option<Capsule>,
    /// Recipient address.
    pub to_email: Option<String>,
}

/// Result of a successful share: both effects completed.
#[derive(Debug, Clone)]
pub struct ShareOutcome {
    /// Store-assigned key of the persisted record.
    pub record_key: RecordKey,
    /// Mail provider acknowledgement for the notification.
    pub receipt: DeliveryReceipt,
}

/// Orchestrates the two-effect share pipeline.
///
/// The store write and the notification are sequential, not transactional:
/// the write is awaited to completion before the email is attempted. By
/// default a notification failure leaves the already-persisted record in
/// place (the caller still sees an error); `strict_reconciliation` opts into
/// a best-effort compensating delete instead.
#[derive(Debug, Clone)]
pub struct ShareService {
    /// Record store capability handle.
    store: Arc<dyn RecordStore>,
    /// Mail capability handle, shared with the email service.
    mailer: Arc<dyn Mailer>,
    /// Configured sender identity.
    sender: String,
    /// Collection name and reconciliation policy.
    config: ShareConfig,
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(
        store: Arc<dyn RecordStore>,
        mailer: Arc<dyn Mailer>,
        sender: impl Into<String>,
        config: ShareConfig,
    ) -> Self {
        Self {
            store,
            mailer,
            sender: sender.into(),
            config,
        }
    }

    /// Shares a capsule: persist the record, then notify the recipient.
    pub async fn share(&self, request: ShareCapsuleRequest) -> AppResult<ShareOutcome> {
        let (capsule, to_email) = match (request.capsule, request.to_email) {
            (Some(capsule), Some(to_email)) if !to_email.is_empty() => (capsule, to_email),
            _ => return Err(AppError::validation(SHARE_FIELDS_REQUIRED)),
        };

        let record = SharedCapsuleRecord::from_capsule(&capsule, &to_email);
        let value = serde_json::to_value(&record).map_err(|e| {
            error!(error = %e, "Failed to serialize shared capsule record");
            AppError::internal(SHARE_FAILED)
        })?;

        let key = match self.store.push(&self.config.collection, &value).await {
            Ok(key) => key,
            Err(e) => {
                error!(to = %to_email, error = %e, "Shared capsule write failed");
                return Err(AppError::store(SHARE_FAILED));
            }
        };
        info!(key = %key, to = %to_email, "Shared capsule persisted");

        let envelope = MailEnvelope {
            from: self.sender.clone(),
            to: to_email.clone(),
            subject: notify::SHARE_SUBJECT.to_string(),
            text: notify::notification_body(&capsule),
        };

        match self.mailer.send_mail(&envelope).await {
            Ok(receipt) => {
                info!(key = %key, to = %to_email, "Share notification sent");
                Ok(ShareOutcome {
                    record_key: key,
                    receipt,
                })
            }
            Err(e) => {
                self.reconcile_failed_notification(&key, &to_email, &e).await;
                Err(AppError::mail(SHARE_FAILED))
            }
        }
    }

    /// Handles a notification failure after the record was already written.
    ///
    /// Default policy keeps the record and logs the gap; strict mode deletes
    /// it best-effort. Either way the caller receives an error.
    async fn reconcile_failed_notification(
        &self,
        key: &RecordKey,
        to_email: &str,
        cause: &AppError,
    ) {
        if !self.config.strict_reconciliation {
            warn!(
                key = %key,
                to = %to_email,
                error = %cause,
                "Share notification failed; record kept without notifying the recipient"
            );
            return;
        }

        match self.store.delete(&self.config.collection, key).await {
            Ok(()) => warn!(
                key = %key,
                to = %to_email,
                error = %cause,
                "Share notification failed; record deleted (strict reconciliation)"
            ),
            Err(delete_error) => error!(
                key = %key,
                error = %delete_error,
                "Compensating delete failed; record left behind"
            ),
        }
    }
}
