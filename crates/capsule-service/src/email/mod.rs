//! Transactional email dispatch.

pub mod service;

pub use service::{EmailService, SendEmailRequest};
