//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::StoreError;

/// Represents a user account.
///
/// Maps to the `users` table:
/// - id: UUID PRIMARY KEY
/// - created_at: TIMESTAMPTZ NOT NULL
/// - updated_at: TIMESTAMPTZ NOT NULL
/// - email: TEXT NOT NULL UNIQUE
/// - hashed_password: TEXT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Email address (unique, no format rules beyond presence)
    pub email: String,

    /// Never populated by any current handler
    #[serde(skip_serializing)]
    pub hashed_password: Option<String>,
}

impl User {
    /// Build a new user with a fresh id; both timestamps share one instant.
    pub fn new(email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            email: email.into(),
            hashed_password: None,
        }
    }
}

/// Repository trait for User data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Fails with `StoreError::Conflict` when the email is taken.
    async fn create(&self, user: &User) -> Result<User, StoreError>;

    /// Remove every user. Irreversible.
    async fn delete_all(&self) -> Result<u64, StoreError>;
}
