//! SMTP mail transport.

use std::fmt;

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use capsule_core::config::MailConfig;
use capsule_core::error::AppError;
use capsule_core::result::AppResult;
use capsule_core::traits::mailer::{DeliveryReceipt, MailEnvelope, Mailer};

/// Mail transport over a pooled SMTP connection.
///
/// The transport is built once at startup and shared across requests. Each
/// [`send_mail`](Mailer::send_mail) call makes exactly one delivery attempt;
/// authentication, connection, and recipient failures are surfaced uniformly
/// as mail errors with the transport's message preserved.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
}

impl SmtpMailer {
    /// Create a mailer from configuration.
    ///
    /// Uses STARTTLS against the configured relay. Credentials are attached
    /// only when a username is configured.
    pub fn new(config: &MailConfig) -> AppResult<Self> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| {
                AppError::configuration(format!("Invalid SMTP relay '{}': {e}", config.host))
            })?
            .port(config.port);

        if !config.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        }

        Ok(Self {
            transport: builder.build(),
            host: config.host.clone(),
        })
    }
}

impl fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_mail(&self, envelope: &MailEnvelope) -> AppResult<DeliveryReceipt> {
        let from: Mailbox = envelope
            .from
            .parse()
            .map_err(|e| AppError::mail(format!("Invalid sender address '{}': {e}", envelope.from)))?;
        let to: Mailbox = envelope
            .to
            .parse()
            .map_err(|e| AppError::mail(format!("Invalid recipient address '{}': {e}", envelope.to)))?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(envelope.subject.clone())
            .body(envelope.text.clone())
            .map_err(|e| AppError::mail(format!("Failed to build message: {e}")))?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| AppError::mail(format!("SMTP transport error: {e}")))?;

        debug!(to = %envelope.to, code = ?response.code(), "SMTP relay accepted message");
        Ok(DeliveryReceipt(format!("{:?}", response.code())))
    }
}
