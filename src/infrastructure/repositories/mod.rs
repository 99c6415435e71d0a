//! Repository Implementations
//!
//! Implementations of the domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgUserRepository** / **PgChirpRepository** - PostgreSQL storage used by the server
//! - **InMemoryUserRepository** / **InMemoryChirpRepository** - process-local storage
//!   with the same semantics, used for tests
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use chirpy::infrastructure::repositories::{PgChirpRepository, PgUserRepository};
//!
//! fn setup_repositories(pool: PgPool) {
//!     let user_repo = PgUserRepository::new(pool.clone());
//!     let chirp_repo = PgChirpRepository::new(pool);
//! }
//! ```

pub mod chirp_repository;
pub mod memory;
pub mod user_repository;

pub use chirp_repository::PgChirpRepository;
pub use memory::{InMemoryChirpRepository, InMemoryUserRepository};
pub use user_repository::PgUserRepository;
