//! In-Memory Repositories
//!
//! Process-local implementations of the repository traits. They mirror the
//! PostgreSQL behavior: unique emails, oldest-first chirp listing and
//! `NotFound` for unknown ids. Nothing survives a restart.

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::{Chirp, ChirpRepository, StoreError, User, UserRepository};

/// Users kept in insertion order.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<User, StoreError> {
        let mut users = self.users.write();
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict(
                "User with this email already exists".into(),
            ));
        }
        users.push(user.clone());
        Ok(user.clone())
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let mut users = self.users.write();
        let removed = users.len() as u64;
        users.clear();
        Ok(removed)
    }
}

/// Chirps kept in insertion order.
#[derive(Default)]
pub struct InMemoryChirpRepository {
    chirps: RwLock<Vec<Chirp>>,
}

impl InMemoryChirpRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChirpRepository for InMemoryChirpRepository {
    async fn create(&self, chirp: &Chirp) -> Result<Chirp, StoreError> {
        self.chirps.write().push(chirp.clone());
        Ok(chirp.clone())
    }

    async fn list(&self) -> Result<Vec<Chirp>, StoreError> {
        let mut chirps = self.chirps.read().clone();
        // stable: equal timestamps keep insertion order
        chirps.sort_by_key(|c| c.created_at);
        Ok(chirps)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Chirp, StoreError> {
        self.chirps
            .read()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}
