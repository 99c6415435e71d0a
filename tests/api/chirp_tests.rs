//! Chirp API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{unique_email, TestApp};

async fn user_id(app: &TestApp) -> String {
    app.create_user(&unique_email()).await["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_create_chirp_masks_profanity() {
    let app = TestApp::new();
    let user_id = user_id(&app).await;

    let chirp = app
        .create_chirp(
            "I hear Mastodon is kinda like Twitter, minus the sharbert and fornax",
            &user_id,
        )
        .await;

    assert_eq!(
        chirp["body"],
        "I hear Mastodon is kinda like Twitter, minus the **** and ****"
    );
    assert_eq!(chirp["user_id"], user_id.as_str());
    assert_eq!(chirp["created_at"], chirp["updated_at"]);
}

#[tokio::test]
async fn test_chirp_for_unknown_user_is_accepted() {
    let app = TestApp::new();

    let chirp = app
        .create_chirp("nobody wrote this", &uuid::Uuid::new_v4().to_string())
        .await;

    assert_eq!(chirp["body"], "nobody wrote this");
}

#[tokio::test]
async fn test_too_long_chirp_is_rejected() {
    let app = TestApp::new();
    let user_id = user_id(&app).await;

    let response = app
        .post_json(
            "/api/chirps",
            &json!({ "body": "a".repeat(141), "user_id": user_id }).to_string(),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "error": "Chirp is too long" }));
    assert_eq!(app.get("/api/chirps").await.json(), json!([]));
}

#[tokio::test]
async fn test_empty_chirp_is_rejected() {
    let app = TestApp::new();
    let user_id = user_id(&app).await;

    let response = app
        .post_json("/api/chirps", &json!({ "body": "", "user_id": user_id }).to_string())
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "error": "Chirp is empty" }));
}

#[tokio::test]
async fn test_whitespace_chirp_is_stored_empty() {
    let app = TestApp::new();
    let user_id = user_id(&app).await;

    let chirp = app.create_chirp("     ", &user_id).await;

    assert_eq!(chirp["body"], "");
}

#[tokio::test]
async fn test_bad_user_id_is_decode_error() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/chirps", r#"{"body":"hello","user_id":"not-a-uuid"}"#)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "error": "Invalid request body" }));
}

#[tokio::test]
async fn test_list_returns_chirps_oldest_first() {
    let app = TestApp::new();
    let user_id = user_id(&app).await;

    let a = app.create_chirp("first", &user_id).await;
    let b = app.create_chirp("second", &user_id).await;

    let response = app.get("/api/chirps").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type.as_deref(), Some("application/json"));
    assert_eq!(response.json(), json!([a, b]));
}

#[tokio::test]
async fn test_get_chirp_by_id() {
    let app = TestApp::new();
    let user_id = user_id(&app).await;
    let chirp = app.create_chirp("find me", &user_id).await;

    let response = app
        .get(&format!("/api/chirps/{}", chirp["id"].as_str().unwrap()))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), chirp);
}

#[tokio::test]
async fn test_get_unknown_chirp_is_not_found() {
    let app = TestApp::new();

    let unknown = app
        .get(&format!("/api/chirps/{}", uuid::Uuid::new_v4()))
        .await;
    let malformed = app.get("/api/chirps/not-a-uuid").await;

    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown.json(), json!({ "error": "Chirp not found" }));
    assert_eq!(malformed.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_validate_chirp_returns_cleaned_body() {
    let app = TestApp::new();

    let ok = app
        .post_json("/api/validate_chirp", r#"{"body":"KERFUFFLE happens"}"#)
        .await;
    let too_long = app
        .post_json(
            "/api/validate_chirp",
            &json!({ "body": "b".repeat(200) }).to_string(),
        )
        .await;

    assert_eq!(ok.status, StatusCode::OK);
    assert_eq!(ok.json(), json!({ "cleaned_body": "**** happens" }));
    assert_eq!(too_long.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.get("/api/chirps").await.json(), json!([]));
}
