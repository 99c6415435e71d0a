//! Chirp Service
//!
//! Runs submitted bodies through validation and moderation before storing
//! them, and serves stored chirps.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{screen_chirp, Chirp, ChirpRepository, ChirpValidationError, StoreError};

/// Chirp service trait
#[async_trait]
pub trait ChirpService: Send + Sync {
    /// Validate, moderate and store a chirp
    async fn create_chirp(&self, request: CreateChirpDto) -> Result<ChirpDto, ChirpError>;

    /// All chirps, oldest first
    async fn list_chirps(&self) -> Result<Vec<ChirpDto>, ChirpError>;

    /// A single chirp
    async fn get_chirp(&self, id: Uuid) -> Result<ChirpDto, ChirpError>;
}

/// Create chirp request
#[derive(Debug, Clone)]
pub struct CreateChirpDto {
    pub body: String,
    pub user_id: Uuid,
}

/// Chirp data transfer object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChirpDto {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub body: String,
    pub user_id: String,
}

impl From<Chirp> for ChirpDto {
    fn from(chirp: Chirp) -> Self {
        Self {
            id: chirp.id.to_string(),
            created_at: chirp.created_at.to_rfc3339(),
            updated_at: chirp.updated_at.to_rfc3339(),
            body: chirp.body,
            user_id: chirp.user_id.to_string(),
        }
    }
}

/// Chirp service errors
#[derive(Debug, thiserror::Error)]
pub enum ChirpError {
    #[error(transparent)]
    Invalid(#[from] ChirpValidationError),

    #[error("Chirp not found")]
    NotFound,

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ChirpError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => ChirpError::NotFound,
            other => ChirpError::Store(other),
        }
    }
}

/// ChirpService implementation
pub struct ChirpServiceImpl<C>
where
    C: ChirpRepository,
{
    chirp_repo: Arc<C>,
}

impl<C> ChirpServiceImpl<C>
where
    C: ChirpRepository,
{
    pub fn new(chirp_repo: Arc<C>) -> Self {
        Self { chirp_repo }
    }
}

#[async_trait]
impl<C> ChirpService for ChirpServiceImpl<C>
where
    C: ChirpRepository + 'static,
{
    #[tracing::instrument(skip(self, request), fields(user_id = %request.user_id))]
    async fn create_chirp(&self, request: CreateChirpDto) -> Result<ChirpDto, ChirpError> {
        let cleaned = screen_chirp(&request.body)?;
        let chirp = self
            .chirp_repo
            .create(&Chirp::new(cleaned, request.user_id))
            .await?;

        tracing::info!(chirp_id = %chirp.id, "Chirp created");
        Ok(ChirpDto::from(chirp))
    }

    async fn list_chirps(&self) -> Result<Vec<ChirpDto>, ChirpError> {
        let chirps = self.chirp_repo.list().await?;
        Ok(chirps.into_iter().map(ChirpDto::from).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn get_chirp(&self, id: Uuid) -> Result<ChirpDto, ChirpError> {
        let chirp = self.chirp_repo.find_by_id(id).await?;
        Ok(ChirpDto::from(chirp))
    }
}
