//! Health Check Handler
//!
//! `GET /api/healthz` answers `OK` as plain text whenever the process is
//! serving requests. It does not touch the database.

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};

/// Readiness probe
pub async fn healthz() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "OK",
    )
}
