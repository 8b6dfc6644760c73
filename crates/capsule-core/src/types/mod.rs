//! Domain types shared across the CapsuleTime crates.

pub mod capsule;

pub use capsule::{Capsule, SharedCapsuleRecord};
