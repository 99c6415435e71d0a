//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use chirpy::config::{AssetSettings, CorsSettings, DatabaseSettings, ServerSettings, Settings};
use chirpy::domain::{StoreError, User, UserRepository};
use chirpy::infrastructure::repositories::{InMemoryChirpRepository, InMemoryUserRepository};
use chirpy::startup::{build_router, AppState};

/// Test application over in-memory repositories
pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepository>,
}

/// Response captured as status, content type and body text
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("response body is JSON")
    }
}

pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "postgres://unused".into(),
            max_connections: 1,
            min_connections: 0,
            acquire_timeout: 1,
            run_migrations: false,
        },
        assets: AssetSettings {
            dir: concat!(env!("CARGO_MANIFEST_DIR"), "/assets").into(),
            path: "/app".into(),
        },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        environment: "test".into(),
    }
}

impl TestApp {
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let chirps = Arc::new(InMemoryChirpRepository::new());
        let state = AppState::new(test_settings(), users.clone(), chirps);

        Self {
            router: build_router(state),
            users,
        }
    }

    /// Application whose user store accepts inserts but fails every bulk delete
    pub fn with_failing_user_reset() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let broken = Arc::new(FailingResetUserRepository {
            inner: users.clone(),
        });
        let chirps = Arc::new(InMemoryChirpRepository::new());
        let state = AppState::new(test_settings(), broken, chirps);

        Self {
            router: build_router(state),
            users,
        }
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        TestResponse {
            status,
            content_type,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a POST request without a body
    pub async fn post(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a CORS preflight request
    pub async fn preflight(&self, uri: &str, origin: &str, method: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri(uri)
                    .header(header::ORIGIN, origin)
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, method)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with a raw JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Create a user and return its JSON record
    pub async fn create_user(&self, email: &str) -> Value {
        let response = self
            .post_json("/api/users", &serde_json::json!({ "email": email }).to_string())
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.json()
    }

    /// Create a chirp and return its JSON record
    pub async fn create_chirp(&self, body: &str, user_id: &str) -> Value {
        let response = self
            .post_json(
                "/api/chirps",
                &serde_json::json!({ "body": body, "user_id": user_id }).to_string(),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.json()
    }
}

/// Delegates inserts to an in-memory store; `delete_all` always fails.
struct FailingResetUserRepository {
    inner: Arc<InMemoryUserRepository>,
}

#[async_trait]
impl UserRepository for FailingResetUserRepository {
    async fn create(&self, user: &User) -> Result<User, StoreError> {
        self.inner.create(user).await
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }
}

/// Generate a unique test email
pub fn unique_email() -> String {
    format!("test_{}@example.com", uuid::Uuid::new_v4())
}
