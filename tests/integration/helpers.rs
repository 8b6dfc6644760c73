//! Shared test helpers for integration tests.
//!
//! Builds the real router with fake capabilities injected through the same
//! constructor seams the server uses, so every assertion runs against the
//! full HTTP pipeline without a network or external providers.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use capsule_api::{AppState, build_router};
use capsule_core::config::AppConfig;
use capsule_core::error::AppError;
use capsule_core::result::AppResult;
use capsule_core::traits::mailer::{DeliveryReceipt, MailEnvelope, Mailer};
use capsule_core::traits::store::{RecordKey, RecordStore};
use capsule_store::MemoryStore;
use capsule_service::{EmailService, ShareService};

/// Sender identity configured into the test app.
pub const SENDER: &str = "noreply@capsuletime.app";
/// Collection shared capsules land in.
pub const COLLECTION: &str = "sharedCapsules";

/// Mailer fake that records every envelope and can be scripted to fail.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<MailEnvelope>>,
    fail_with: Mutex<Option<String>>,
}

impl RecordingMailer {
    /// Envelopes received so far, including ones that were then failed.
    pub fn sent(&self) -> Vec<MailEnvelope> {
        self.sent.lock().unwrap().clone()
    }

    /// Make every subsequent send fail with the given cause.
    pub fn set_failure(&self, cause: &str) {
        *self.fail_with.lock().unwrap() = Some(cause.to_string());
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_mail(&self, envelope: &MailEnvelope) -> AppResult<DeliveryReceipt> {
        self.sent.lock().unwrap().push(envelope.clone());
        match self.fail_with.lock().unwrap().clone() {
            Some(cause) => Err(AppError::mail(cause)),
            None => Ok(DeliveryReceipt("250 Ok".to_string())),
        }
    }
}

/// Record store fake whose writes always fail.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    async fn push(&self, _collection: &str, _record: &Value) -> AppResult<RecordKey> {
        Err(AppError::store("firebase unavailable"))
    }

    async fn delete(&self, _collection: &str, _key: &RecordKey) -> AppResult<()> {
        Err(AppError::store("firebase unavailable"))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(false)
    }
}

/// Build the application router around the given capabilities.
pub fn build_app(mailer: Arc<dyn Mailer>, store: Arc<dyn RecordStore>, strict: bool) -> Router {
    let mut config = AppConfig::default();
    config.share.strict_reconciliation = strict;

    let email_service = Arc::new(EmailService::new(Arc::clone(&mailer), SENDER));
    let share_service = Arc::new(ShareService::new(store, mailer, SENDER, config.share.clone()));

    build_router(AppState {
        config: Arc::new(config),
        email_service,
        share_service,
    })
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Handle onto the injected mailer fake
    pub mailer: Arc<RecordingMailer>,
    /// Handle onto the injected in-memory store
    pub store: Arc<MemoryStore>,
}

/// A collected HTTP response: status, headers, and parsed body.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    /// App with working capabilities and default reconciliation.
    pub fn new() -> Self {
        Self::build(false, false)
    }

    /// App with strict reconciliation enabled.
    pub fn strict() -> Self {
        Self::build(true, false)
    }

    /// App whose store rejects every write. The `store` handle stays the
    /// empty in-memory store, so record-count assertions still hold.
    pub fn failing_store() -> Self {
        Self::build(false, true)
    }

    fn build(strict: bool, failing_store: bool) -> Self {
        let mailer = Arc::new(RecordingMailer::default());
        let store = Arc::new(MemoryStore::new());

        let dyn_store: Arc<dyn RecordStore> = if failing_store {
            Arc::new(FailingStore)
        } else {
            Arc::clone(&store) as Arc<dyn RecordStore>
        };

        let router = build_app(Arc::clone(&mailer) as Arc<dyn Mailer>, dyn_store, strict);

        Self {
            router,
            mailer,
            store,
        }
    }

    /// Drive one request through the router and collect the response.
    /// Non-JSON bodies come back as a JSON string value.
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Assert the three legacy CORS headers of the email route are present.
pub fn assert_legacy_cors(response: &TestResponse) {
    assert_eq!(
        response.headers.get("access-control-allow-origin").unwrap(),
        "*"
    );
    assert_eq!(
        response.headers.get("access-control-allow-methods").unwrap(),
        "GET, POST"
    );
    assert_eq!(
        response.headers.get("access-control-allow-headers").unwrap(),
        "Content-Type"
    );
}
