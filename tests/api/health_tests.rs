//! Health Check API Tests

use axum::http::StatusCode;

use crate::common::TestApp;

#[tokio::test]
async fn test_healthz_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/api/healthz").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "OK");
    assert_eq!(
        response.content_type.as_deref(),
        Some("text/plain; charset=utf-8")
    );
}

#[tokio::test]
async fn test_healthz_rejects_post() {
    let app = TestApp::new();

    let response = app.post("/api/healthz").await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}
