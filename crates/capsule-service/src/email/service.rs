//! Email send pipeline: validate, dispatch once, map the outcome.

use std::sync::Arc;

use tracing::info;

use capsule_core::error::{AppError, ErrorKind};
use capsule_core::result::AppResult;
use capsule_core::traits::mailer::{DeliveryReceipt, MailEnvelope, Mailer};

/// Validation message when any required field is missing or empty.
pub const EMAIL_FIELDS_REQUIRED: &str = r#"Les champs "to", "subject" et "text" sont requis"#;
/// Generic failure message for a mail dispatch error.
pub const EMAIL_SEND_FAILED: &str = "Erreur lors de l'envoi de l'email";

/// Request to send a transactional email.
///
/// Fields are optional so that partial request bodies reach validation
/// instead of failing deserialization; all three must be present and
/// non-empty to pass.
#[derive(Debug, Clone, Default)]
pub struct SendEmailRequest {
    /// Recipient address.
    pub to: Option<String>,
    /// Subject line.
    pub subject: Option<String>,
    /// Plain-text body.
    pub text: Option<String>,
}

/// Validates send-email requests and dispatches them through the mail
/// capability, one attempt per request.
#[derive(Debug, Clone)]
pub struct EmailService {
    /// Mail capability handle.
    mailer: Arc<dyn Mailer>,
    /// Configured sender identity, used as the envelope `from`.
    sender: String,
}

impl EmailService {
    /// Creates a new email service.
    pub fn new(mailer: Arc<dyn Mailer>, sender: impl Into<String>) -> Self {
        Self {
            mailer,
            sender: sender.into(),
        }
    }

    /// Validates the request and dispatches exactly one email.
    ///
    /// Structural validation only: each of `to`, `subject`, and `text` must
    /// be present and non-empty. No address-format or content checks. The
    /// mail capability is not invoked unless validation passes; its failure
    /// cause is attached as response details.
    pub async fn send(&self, request: SendEmailRequest) -> AppResult<DeliveryReceipt> {
        let envelope = MailEnvelope {
            from: self.sender.clone(),
            to: required(request.to)?,
            subject: required(request.subject)?,
            text: required(request.text)?,
        };

        let receipt = self.mailer.send_mail(&envelope).await.map_err(|e| {
            AppError::with_details(ErrorKind::Mail, EMAIL_SEND_FAILED, cause_of(e))
        })?;

        info!(to = %envelope.to, receipt = %receipt.0, "Email dispatched");
        Ok(receipt)
    }
}

fn required(value: Option<String>) -> AppResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::validation(EMAIL_FIELDS_REQUIRED)),
    }
}

fn cause_of(error: AppError) -> String {
    error.details.unwrap_or(error.message)
}
