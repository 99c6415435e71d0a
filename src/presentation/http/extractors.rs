//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::extract::FromRequest;

use crate::shared::error::AppError;

/// JSON body extractor whose rejection is an [`AppError`].
///
/// Malformed or mistyped bodies become `400 {"error": "Invalid request body"}`
/// instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
