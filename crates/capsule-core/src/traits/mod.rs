//! Capability traits implemented by the provider crates.

pub mod mailer;
pub mod store;

pub use mailer::{DeliveryReceipt, MailEnvelope, Mailer};
pub use store::{RecordKey, RecordStore};
