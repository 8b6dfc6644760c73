//! Integration tests for the email dispatch endpoint.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_missing_or_empty_fields_return_400_without_dispatch() {
    let app = TestApp::new();

    let bodies = [
        json!({}),
        json!({"to": "a@b.com"}),
        json!({"to": "a@b.com", "subject": "Hi"}),
        json!({"subject": "Hi", "text": "Hello"}),
        json!({"to": "", "subject": "Hi", "text": "Hello"}),
        json!({"to": "a@b.com", "subject": "", "text": "Hello"}),
        json!({"to": "a@b.com", "subject": "Hi", "text": ""}),
    ];

    for body in bodies {
        let response = app
            .request("POST", "/api/sendEmail", Some(body.clone()))
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(
            response.body["error"],
            r#"Les champs "to", "subject" et "text" sont requis"#
        );
        helpers::assert_legacy_cors(&response);
    }

    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_absent_body_returns_400() {
    let app = TestApp::new();

    let response = app.request("POST", "/api/sendEmail", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["error"].is_string());
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_non_post_methods_return_405() {
    let app = TestApp::new();

    for method in ["GET", "PUT", "DELETE", "PATCH"] {
        let response = app.request(method, "/api/sendEmail", None).await;

        assert_eq!(
            response.status,
            StatusCode::METHOD_NOT_ALLOWED,
            "method: {method}"
        );
        assert_eq!(response.body["error"], "Méthode non autorisée");
        helpers::assert_legacy_cors(&response);
    }

    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_valid_request_dispatches_exactly_once() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/sendEmail",
            Some(json!({"to": "a@b.com", "subject": "Hi", "text": "Hello"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Email envoyé avec succès!");
    helpers::assert_legacy_cors(&response);

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].from, helpers::SENDER);
    assert_eq!(sent[0].to, "a@b.com");
    assert_eq!(sent[0].subject, "Hi");
    assert_eq!(sent[0].text, "Hello");
}

#[tokio::test]
async fn test_mail_failure_returns_500_with_cause_details() {
    let app = TestApp::new();
    app.mailer.set_failure("auth error");

    let response = app
        .request(
            "POST",
            "/api/sendEmail",
            Some(json!({"to": "a@b.com", "subject": "Hi", "text": "Hello"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "Erreur lors de l'envoi de l'email");
    assert!(
        response.body["details"]
            .as_str()
            .unwrap()
            .contains("auth error"),
        "details: {}",
        response.body["details"]
    );
    helpers::assert_legacy_cors(&response);
}

#[tokio::test]
async fn test_welcome_route() {
    let app = TestApp::new();

    let response = app.request("GET", "/", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!("Bienvenue sur l'API CapsuleTime!"));
}

#[tokio::test]
async fn test_health_route() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
