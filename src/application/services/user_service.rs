//! User Service
//!
//! Handles user creation and bulk removal.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{StoreError, User, UserRepository};

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user with the given email
    async fn create_user(&self, email: &str) -> Result<UserDto, UserError>;

    /// Delete every user, returning how many were removed
    async fn reset_users(&self) -> Result<u64, StoreError>;
}

/// User data transfer object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDto {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub email: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
            email: user.email,
        }
    }
}

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("Email already registered")]
    EmailTaken,

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for UserError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Conflict(_) => UserError::EmailTaken,
            other => UserError::Store(other),
        }
    }
}

/// UserService implementation
pub struct UserServiceImpl<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UserServiceImpl<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
    U: UserRepository + 'static,
{
    #[tracing::instrument(skip(self))]
    async fn create_user(&self, email: &str) -> Result<UserDto, UserError> {
        let user = self.user_repo.create(&User::new(email)).await?;
        tracing::info!(user_id = %user.id, "User created");
        Ok(UserDto::from(user))
    }

    #[tracing::instrument(skip(self))]
    async fn reset_users(&self) -> Result<u64, StoreError> {
        let removed = self.user_repo.delete_all().await?;
        tracing::warn!(removed, "All users deleted");
        Ok(removed)
    }
}
