//! # capsule-api
//!
//! HTTP API layer for CapsuleTime built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, logging), DTOs, and the
//! mapping from domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
