//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use capsule_core::config::AppConfig;
use capsule_service::{EmailService, ShareService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Email send pipeline.
    pub email_service: Arc<EmailService>,
    /// Capsule share pipeline.
    pub share_service: Arc<ShareService>,
}
