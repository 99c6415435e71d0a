//! Admin and Asset API Tests

use axum::http::StatusCode;

use crate::common::{unique_email, TestApp};

#[tokio::test]
async fn test_asset_requests_are_counted() {
    let app = TestApp::new();

    let page = app.get("/app/index.html").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Welcome to Chirpy"));

    app.get("/app/index.html").await;
    app.get("/app/missing.png").await;

    let metrics = app.get("/admin/metrics").await;
    assert_eq!(metrics.status, StatusCode::OK);
    assert_eq!(
        metrics.content_type.as_deref(),
        Some("text/html; charset=utf-8")
    );
    assert!(metrics.body.contains("Chirpy has been visited 3 times!"));
}

#[tokio::test]
async fn test_api_requests_are_not_counted() {
    let app = TestApp::new();

    app.get("/api/healthz").await;
    app.get("/api/chirps").await;

    let metrics = app.get("/admin/metrics").await;
    assert!(metrics.body.contains("Chirpy has been visited 0 times!"));
}

#[tokio::test]
async fn test_reset_clears_counter_and_users() {
    let app = TestApp::new();
    let email = unique_email();
    app.create_user(&email).await;
    app.get("/app/index.html").await;
    app.get("/app/index.html").await;

    let response = app.post("/admin/reset").await;
    assert_eq!(response.status, StatusCode::OK);

    let metrics = app.get("/admin/metrics").await;
    assert!(metrics.body.contains("Chirpy has been visited 0 times!"));
    assert!(app.users.is_empty());

    // the email is free again
    app.create_user(&email).await;
}

#[tokio::test]
async fn test_reset_keeps_chirps() {
    let app = TestApp::new();
    let user = app.create_user(&unique_email()).await;
    app.create_chirp("still here", user["id"].as_str().unwrap())
        .await;

    app.post("/admin/reset").await;

    let chirps = app.get("/api/chirps").await.json();
    assert_eq!(chirps.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_failed_user_deletion_still_resets_counter() {
    let app = TestApp::with_failing_user_reset();
    app.create_user(&unique_email()).await;
    app.get("/app/index.html").await;
    app.get("/app/index.html").await;
    app.get("/app/index.html").await;

    let before = app.get("/admin/metrics").await;
    assert!(before.body.contains("Chirpy has been visited 3 times!"));

    let response = app.post("/admin/reset").await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json(),
        serde_json::json!({ "error": "Something went wrong" })
    );

    let after = app.get("/admin/metrics").await;
    assert!(after.body.contains("Chirpy has been visited 0 times!"));
    assert_eq!(app.users.len(), 1);
}
