//! Integration tests for the capsule share endpoint, including the
//! partial-failure reconciliation policy between the store write and the
//! notification email.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};

use capsule_service::share::notify::SHARE_SUBJECT;
use helpers::{COLLECTION, TestApp};

fn capsule() -> Value {
    json!({
        "message": "hi",
        "dateOuverture": 1_893_456_000_000_i64,
        "estOuverte": false,
        "sentiment": "happy",
        "creatorID": "u1",
    })
}

fn share_body() -> Value {
    json!({"capsule": capsule(), "toEmail": "x@y.com"})
}

#[tokio::test]
async fn test_missing_fields_return_400_without_effects() {
    let app = TestApp::new();

    let bodies = [
        json!({}),
        json!({"capsule": capsule()}),
        json!({"toEmail": "x@y.com"}),
        json!({"capsule": capsule(), "toEmail": ""}),
    ];

    for body in bodies {
        let response = app
            .request("POST", "/api/shareCapsule", Some(body.clone()))
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(
            response.body["error"],
            r#"Les champs "capsule" et "toEmail" sont requis"#
        );
    }

    assert!(app.store.is_empty(COLLECTION));
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_share_persists_record_then_notifies() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/shareCapsule", Some(share_body()))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Capsule partagée avec succès!");

    let records = app.store.records(COLLECTION);
    assert_eq!(records.len(), 1);
    let record = &records[0].1;
    assert_eq!(record["message"], "hi");
    assert_eq!(record["dateOuverture"], 1_893_456_000_000_i64);
    assert_eq!(record["estOuverte"], false);
    assert_eq!(record["sentiment"], "happy");
    assert_eq!(record["creatorID"], "u1");
    assert_eq!(record["isShared"], true);
    assert_eq!(record["sharedWithEmails"], json!(["x@y.com"]));

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "x@y.com");
    assert_eq!(sent[0].subject, SHARE_SUBJECT);
    assert!(
        sent[0].text.contains("01/01/2030"),
        "notification body: {}",
        sent[0].text
    );
}

#[tokio::test]
async fn test_store_failure_returns_500_and_skips_notification() {
    let app = TestApp::failing_store();

    let response = app
        .request("POST", "/api/shareCapsule", Some(share_body()))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body["error"],
        "Erreur lors du partage de la capsule"
    );
    assert!(response.body.get("details").is_none());

    assert!(app.store.is_empty(COLLECTION));
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_mail_failure_leaves_persisted_record_behind() {
    let app = TestApp::new();
    app.mailer.set_failure("smtp down");

    let response = app
        .request("POST", "/api/shareCapsule", Some(share_body()))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body["error"],
        "Erreur lors du partage de la capsule"
    );
    assert!(response.body.get("details").is_none());

    // The record was durably written before the notification was attempted;
    // the recipient was never notified. Accepted inconsistency window.
    assert_eq!(app.store.len(COLLECTION), 1);
}

#[tokio::test]
async fn test_repeated_share_creates_distinct_records() {
    let app = TestApp::new();

    for _ in 0..2 {
        let response = app
            .request("POST", "/api/shareCapsule", Some(share_body()))
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let records = app.store.records(COLLECTION);
    assert_eq!(records.len(), 2);
    assert_ne!(records[0].0, records[1].0);
    assert_eq!(records[0].1, records[1].1);
}

#[tokio::test]
async fn test_strict_reconciliation_deletes_record_on_mail_failure() {
    let app = TestApp::strict();
    app.mailer.set_failure("smtp down");

    let response = app
        .request("POST", "/api/shareCapsule", Some(share_body()))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(app.store.is_empty(COLLECTION));
}

#[tokio::test]
async fn test_non_post_share_is_rejected() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/shareCapsule", None).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(app.store.is_empty(COLLECTION));
}
