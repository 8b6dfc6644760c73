//! Route definitions for the CapsuleTime HTTP API.
//!
//! API routes are mounted under `/api`; the welcome route lives at the root.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(email_routes())
        .merge(capsule_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .route("/", get(handlers::root::welcome))
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Email dispatch endpoint.
///
/// POST only — the method-router fallback turns every other verb into the
/// JSON 405 before any extraction runs. The legacy wildcard CORS headers are
/// applied to every response of this route, whatever the outcome.
fn email_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/sendEmail",
            post(handlers::email::send_email).fallback(handlers::email::method_not_allowed),
        )
        .route_layer(axum_middleware::from_fn(
            middleware::cors::legacy_email_headers,
        ))
}

/// Capsule share endpoint.
fn capsule_routes() -> Router<AppState> {
    Router::new().route("/shareCapsule", post(handlers::capsule::share_capsule))
}

/// Health check endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
