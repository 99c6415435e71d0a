//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::application::services::{ChirpDto, UserDto};

/// User response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub email: String,
}

impl From<UserDto> for UserResponse {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
            email: dto.email,
        }
    }
}

/// Chirp response
#[derive(Debug, Serialize)]
pub struct ChirpResponse {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub body: String,
    pub user_id: String,
}

impl From<ChirpDto> for ChirpResponse {
    fn from(dto: ChirpDto) -> Self {
        Self {
            id: dto.id,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
            body: dto.body,
            user_id: dto.user_id,
        }
    }
}

/// Result of `POST /api/validate_chirp`
#[derive(Debug, Serialize)]
pub struct CleanedChirpResponse {
    pub cleaned_body: String,
}
