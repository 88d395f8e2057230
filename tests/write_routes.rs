//! Write routes validate before they touch the database, so these run
//! against a pool whose server does not exist.

use std::time::Duration;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::Pool;
use serde_json::{Value, json};
use tower::ServiceExt;

const UNREACHABLE_DATABASE: &str = "postgres://shelter@127.0.0.1:1/shelter";

fn app() -> Router {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(UNREACHABLE_DATABASE);
    let pool = Pool::builder()
        .connection_timeout(Duration::from_millis(200))
        .build_unchecked(manager);
    shelter::app(pool)
}

async fn send(method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_invalid_volunteer_is_rejected_before_insert() {
    let (status, body) = send(
        "POST",
        "/volunteers",
        Some(json!({"full_name": "", "email": "not-an-email", "zip_code": "1234"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.contains(&json!("Full name is required")));
    assert!(errors.len() >= 2);
}

#[tokio::test]
async fn test_valid_volunteer_with_numeric_fields_reaches_the_database() {
    let (status, body) = send(
        "POST",
        "/volunteers",
        Some(json!({
            "full_name": "Dana Ortiz",
            "email": "dana@example.com",
            "phone": 5551234567u64,
            "zip_code": 97201,
            "availability_date": "2024-06-15T20:00:00-07:00"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE, "{body}");
}

#[tokio::test]
async fn test_incomplete_registration_lists_field_names() {
    let (status, body) = send(
        "POST",
        "/users/register",
        Some(json!({"email": "dana@example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["fields"],
        json!(["name", "password", "address", "city", "state"])
    );
}

#[tokio::test]
async fn test_malformed_registration_email_is_flagged() {
    let (status, body) = send(
        "POST",
        "/users/register",
        Some(json!({
            "name": "Dana",
            "email": "dana-at-example",
            "password": "correct horse",
            "address": "1 Main St",
            "city": "Portland",
            "state": "OR"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["fields"], json!(["email"]));
}

#[tokio::test]
async fn test_deactivate_requires_a_uuid() {
    let (status, _) = send("PATCH", "/volunteers/not-a-uuid/deactivate", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_event_is_rejected() {
    let (status, body) = send(
        "POST",
        "/events",
        Some(json!({"title": "Adoption day", "urgency": "whenever"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!body["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_notification_is_rejected() {
    let (status, body) = send("POST", "/notifications", Some(json!({"message": ""}))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!body["errors"].as_array().unwrap().is_empty());
}
