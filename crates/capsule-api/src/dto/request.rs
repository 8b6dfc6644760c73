//! Request DTOs.
//!
//! Fields are optional so that partial or empty JSON bodies deserialize and
//! reach the services' validation step, which produces the tagged 400
//! response instead of a transport-level rejection.

use serde::{Deserialize, Serialize};

use capsule_core::types::Capsule;
use capsule_service::{SendEmailRequest, ShareCapsuleRequest};

/// Body of `POST /api/sendEmail`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SendEmailBody {
    /// Recipient address.
    #[serde(default)]
    pub to: Option<String>,
    /// Subject line.
    #[serde(default)]
    pub subject: Option<String>,
    /// Plain-text body.
    #[serde(default)]
    pub text: Option<String>,
}

impl From<SendEmailBody> for SendEmailRequest {
    fn from(body: SendEmailBody) -> Self {
        Self {
            to: body.to,
            subject: body.subject,
            text: body.text,
        }
    }
}

/// Body of `POST /api/shareCapsule`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareCapsuleBody {
    /// The capsule being shared.
    #[serde(default)]
    pub capsule: Option<Capsule>,
    /// Recipient address.
    #[serde(rename = "toEmail", default)]
    pub to_email: Option<String>,
}

impl From<ShareCapsuleBody> for ShareCapsuleRequest {
    fn from(body: ShareCapsuleBody) -> Self {
        Self {
            capsule: body.capsule,
            to_email: body.to_email,
        }
    }
}
