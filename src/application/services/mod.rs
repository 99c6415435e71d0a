//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **UserService**: user creation and the admin reset of all users
//! - **ChirpService**: validated, moderated chirp creation and retrieval

pub mod chirp_service;
pub mod user_service;

// Re-export user service types
pub use user_service::{UserDto, UserError, UserService, UserServiceImpl};

// Re-export chirp service types
pub use chirp_service::{ChirpDto, ChirpError, ChirpService, ChirpServiceImpl, CreateChirpDto};
