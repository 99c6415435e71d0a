//! Chirp Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::application::dto::request::{CreateChirpRequest, ValidateChirpRequest};
use crate::application::dto::response::{ChirpResponse, CleanedChirpResponse};
use crate::application::services::{ChirpError, CreateChirpDto};
use crate::domain::screen_chirp;
use crate::presentation::http::extractors::AppJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn map_chirp_error(e: ChirpError) -> AppError {
    match e {
        ChirpError::Invalid(e) => AppError::Validation(e),
        ChirpError::NotFound => AppError::NotFound("Chirp not found".into()),
        ChirpError::Store(e) => AppError::Store(e),
    }
}

/// Create a chirp
pub async fn create_chirp(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateChirpRequest>,
) -> Result<(StatusCode, Json<ChirpResponse>), AppError> {
    let request = CreateChirpDto {
        body: body.body,
        user_id: body.user_id,
    };

    let chirp = state
        .chirps
        .create_chirp(request)
        .await
        .map_err(map_chirp_error)?;

    Ok((StatusCode::CREATED, Json(ChirpResponse::from(chirp))))
}

/// List all chirps, oldest first
pub async fn list_chirps(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChirpResponse>>, AppError> {
    let chirps = state.chirps.list_chirps().await.map_err(map_chirp_error)?;

    Ok(Json(chirps.into_iter().map(ChirpResponse::from).collect()))
}

/// Get a single chirp. Ids that are not UUIDs cannot exist and are reported as not found.
pub async fn get_chirp(
    State(state): State<AppState>,
    Path(chirp_id): Path<String>,
) -> Result<Json<ChirpResponse>, AppError> {
    let chirp_id: Uuid = chirp_id
        .parse()
        .map_err(|_| AppError::NotFound("Chirp not found".into()))?;

    let chirp = state
        .chirps
        .get_chirp(chirp_id)
        .await
        .map_err(map_chirp_error)?;

    Ok(Json(ChirpResponse::from(chirp)))
}

/// Check and clean a body without storing it
pub async fn validate_chirp(
    AppJson(body): AppJson<ValidateChirpRequest>,
) -> Result<Json<CleanedChirpResponse>, AppError> {
    let cleaned_body = screen_chirp(&body.body)?;
    Ok(Json(CleanedChirpResponse { cleaned_body }))
}
