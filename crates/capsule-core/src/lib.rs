//! # capsule-core
//!
//! Core crate for the CapsuleTime backend. Contains the capability traits,
//! configuration schemas, domain types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other CapsuleTime crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
