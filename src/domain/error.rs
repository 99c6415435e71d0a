//! Storage errors.

/// Failure reported by a repository.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A uniqueness constraint was violated.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The requested row does not exist.
    #[error("Not found")]
    NotFound,

    /// Any other failure of the underlying database.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Translate a sqlx error, mapping unique violations to `Conflict`.
    pub fn from_insert(e: sqlx::Error, conflict_message: &str) -> Self {
        match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::Conflict(conflict_message.to_string())
            }
            _ => StoreError::Database(e),
        }
    }
}
