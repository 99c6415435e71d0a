//! # Domain Layer
//!
//! The domain layer contains the core rules of the service: what a user and a
//! chirp are, which chirp bodies are acceptable, how bodies are moderated, and
//! the storage contract the rest of the application talks to.
//!
//! ## Structure
//!
//! - **entities**: `User`, `Chirp` and their repository traits
//! - **services**: chirp validation and moderation (pure functions)
//! - **error**: the storage error taxonomy shared by every repository
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Validation and moderation are synchronous and side-effect free

pub mod entities;
pub mod error;
pub mod services;

// Re-export commonly used types
pub use entities::*;
pub use error::StoreError;
pub use services::*;
