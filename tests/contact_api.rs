use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

mod common;

async fn post_contact(app: axum::Router, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();

    (status, value)
}

fn valid_payload() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "company": "Analytical Engines Ltd.",
        "phone": "",
        "service": "web-development",
        "budget": "10k-25k",
        "message": "We would like a complete redesign."
    })
}

#[tokio::test]
async fn missing_required_fields_return_400() {
    let app = common::create_test_app("127.0.0.1");

    let (status, body) = post_contact(app, json!({"email": "a@b.com"}).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("required fields")
    );
}

#[tokio::test]
async fn invalid_email_returns_400() {
    let app = common::create_test_app("127.0.0.1");

    let mut payload = valid_payload();
    payload["email"] = json!("not-an-email");
    let (status, body) = post_contact(app, payload.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("valid email address")
    );
}

#[tokio::test]
async fn malformed_payload_becomes_a_generic_client_error() {
    let app = common::create_test_app("127.0.0.1");

    let (status, body) = post_contact(app, "this is not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("unexpected error")
    );
}

#[tokio::test]
async fn unconfigured_email_reports_the_fallback_channel() {
    // Blank smtp_host: the capability is absent.
    let app = common::create_test_app("");

    let (status, body) = post_contact(app, valid_payload().to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Email service is not configured"));
    assert!(message.contains("contact us directly"));
}

#[tokio::test]
async fn failed_staff_notification_is_an_overall_failure() {
    // Nothing listens on the configured SMTP port, so the first send fails.
    let app = common::create_test_app("127.0.0.1");

    let (status, body) = post_contact(app, valid_payload().to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("contact us directly")
    );
}
