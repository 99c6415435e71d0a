//! User Handlers

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::application::dto::request::CreateUserRequest;
use crate::application::dto::response::UserResponse;
use crate::application::services::UserError;
use crate::presentation::http::extractors::AppJson;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

/// Create a user
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    body.validate().map_err(validation_error)?;

    let user = state
        .users
        .create_user(&body.email)
        .await
        .map_err(|e| match e {
            UserError::EmailTaken => AppError::Conflict("Email already registered".into()),
            UserError::Store(e) => AppError::Store(e),
        })?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
