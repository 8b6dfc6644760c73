//! CapsuleTime Server — HTTP backend for the time capsule application.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use capsule_api::{AppState, build_router};
use capsule_core::config::AppConfig;
use capsule_core::error::AppError;
use capsule_core::traits::{Mailer, RecordStore};
use capsule_mailer::SmtpMailer;
use capsule_service::{EmailService, ShareService};
use capsule_store::StoreManager;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("CAPSULE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting CapsuleTime v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Initialize capabilities ──────────────────────────
    let store: Arc<dyn RecordStore> = Arc::new(StoreManager::new(&config.store)?);
    tracing::info!(provider = %config.store.provider, "Record store initialized");

    let mailer: Arc<dyn Mailer> = Arc::new(SmtpMailer::new(&config.mail)?);
    tracing::info!(host = %config.mail.host, "Mail transport initialized");

    // ── Step 2: Initialize services ──────────────────────────────
    let sender = config.mail.sender().to_string();
    let email_service = Arc::new(EmailService::new(Arc::clone(&mailer), sender.clone()));
    let share_service = Arc::new(ShareService::new(
        Arc::clone(&store),
        Arc::clone(&mailer),
        sender,
        config.share.clone(),
    ));

    // ── Step 3: Build and start HTTP server ──────────────────────
    let state = AppState {
        config: Arc::new(config.clone()),
        email_service,
        share_service,
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("CapsuleTime server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("CapsuleTime server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
