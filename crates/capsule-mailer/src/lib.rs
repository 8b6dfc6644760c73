//! # capsule-mailer
//!
//! SMTP implementation of the [`Mailer`] capability on top of
//! [lettre](https://lettre.rs), using the tokio executor and a pooled
//! STARTTLS connection to the configured relay.
//!
//! [`Mailer`]: capsule_core::traits::Mailer

pub mod smtp;

pub use smtp::SmtpMailer;
