//! Capsule sharing: persist + notify.

pub mod notify;
pub mod service;

pub use service::{ShareCapsuleRequest, ShareOutcome, ShareService};
