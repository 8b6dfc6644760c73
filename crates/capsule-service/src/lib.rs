//! # capsule-service
//!
//! Business logic for CapsuleTime — the two request-to-side-effect
//! pipelines. [`EmailService`] validates and dispatches transactional email;
//! [`ShareService`] persists a shared capsule record and notifies the
//! recipient, reconciling partial failure between the two effects.

pub mod email;
pub mod share;

pub use email::service::{EmailService, SendEmailRequest};
pub use share::service::{ShareCapsuleRequest, ShareOutcome, ShareService};
