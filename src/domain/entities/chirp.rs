//! Chirp entity and repository trait.
//!
//! Maps to the `chirps` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::StoreError;

/// A short text post.
///
/// Maps to the `chirps` table:
/// - id: UUID PRIMARY KEY
/// - created_at: TIMESTAMPTZ NOT NULL
/// - updated_at: TIMESTAMPTZ NOT NULL
/// - body: TEXT NOT NULL (at most 140 characters, moderated)
/// - user_id: UUID NOT NULL (not a foreign key)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chirp {
    pub id: Uuid,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Validated and moderated body
    pub body: String,

    /// Author. Existence of the user is not checked.
    pub user_id: Uuid,
}

impl Chirp {
    /// Build a new chirp. The body must already be validated and cleaned.
    pub fn new(body: impl Into<String>, user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            body: body.into(),
            user_id,
        }
    }
}

/// Repository trait for Chirp data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChirpRepository: Send + Sync {
    /// Insert a new chirp.
    async fn create(&self, chirp: &Chirp) -> Result<Chirp, StoreError>;

    /// All chirps, oldest first.
    async fn list(&self) -> Result<Vec<Chirp>, StoreError>;

    /// Find a chirp by id. Fails with `StoreError::NotFound` when absent.
    async fn find_by_id(&self, id: Uuid) -> Result<Chirp, StoreError>;
}
