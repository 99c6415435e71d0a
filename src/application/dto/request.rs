//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create user request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

/// Create chirp request
///
/// Body rules are enforced by the chirp service.
#[derive(Debug, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,
    pub user_id: Uuid,
}

/// Validate chirp request (no persistence)
#[derive(Debug, Deserialize)]
pub struct ValidateChirpRequest {
    pub body: String,
}
