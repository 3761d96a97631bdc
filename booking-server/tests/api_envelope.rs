//! API 响应信封集成测试
//!
//! 所有端点的错误都必须走 `{success:false, error}` 信封，
//! 包括反序列化阶段就失败的请求 (未知分店、坏日期、
//! 非法查询参数)。

use axum::Router;
use axum::body::Body;
use booking_server::{Config, ServerState, api};
use http::{Request, StatusCode, header};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

async fn test_app() -> (Router, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db = booking_server::db::connect(&dir.path().join("test.db"))
        .await
        .expect("Failed to open test database");
    let state = ServerState::new(Config::from_env(), db, None);
    (api::build_app().with_state(state), dir)
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).expect("error responses must be JSON")
}

fn assert_error_envelope(json: &Value) {
    assert_eq!(json["success"], Value::Bool(false));
    assert!(
        json["error"].as_str().is_some_and(|e| !e.is_empty()),
        "error message must be present, got {json}"
    );
}

#[tokio::test]
async fn unknown_branch_is_rejected_inside_the_envelope() {
    let (app, _dir) = test_app().await;
    let body = r#"{"name":"Alice","email":"alice@example.com","phone":"555-0100",
        "branch":"downtown","date":"2026-09-10","time":"7:00 PM","guests":4}"#;

    let response = app
        .oneshot(post_json("/api/bookings", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_error_envelope(&body_json(response).await);
}

#[tokio::test]
async fn malformed_date_is_rejected_inside_the_envelope() {
    let (app, _dir) = test_app().await;
    let body = r#"{"name":"Alice","email":"alice@example.com","phone":"555-0100",
        "branch":"naran","date":"10/09/2026","time":"7:00 PM","guests":4}"#;

    let response = app
        .oneshot(post_json("/api/bookings", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_error_envelope(&body_json(response).await);
}

#[tokio::test]
async fn invalid_status_query_is_rejected_inside_the_envelope() {
    let (app, _dir) = test_app().await;
    let request = Request::builder()
        .uri("/api/admin/bookings?status=bogus")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_error_envelope(&body_json(response).await);
}

#[tokio::test]
async fn oversized_party_is_rejected_inside_the_envelope() {
    let (app, _dir) = test_app().await;
    // A few of these on one slot would overflow the occupancy sums
    let body = r#"{"name":"Alice","email":"alice@example.com","phone":"555-0100",
        "branch":"naran","date":"2026-09-10","time":"7:00 PM","guests":4000000000}"#;

    let response = app
        .oneshot(post_json("/api/bookings", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_error_envelope(&json);
    assert!(json["error"].as_str().unwrap().contains("guests"));
}

#[tokio::test]
async fn valid_booking_still_lands_in_the_success_envelope() {
    let (app, _dir) = test_app().await;
    let body = r#"{"name":"Alice","email":"alice@example.com","phone":"555-0100",
        "branch":"naran","date":"2026-09-10","time":"7:00 PM","guests":4}"#;

    let response = app
        .oneshot(post_json("/api/bookings", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], Value::Bool(true));
    assert_eq!(json["data"]["status"], "pending");
}
