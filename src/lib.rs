//! # Chirpy
//!
//! A small social posting service:
//! - Users identified by a unique email
//! - Chirps: posts of at most 140 characters with profanity masked
//! - Static asset serving with a visit counter
//! - Admin metrics page and reset action
//!
//! ## Architecture
//!
//! - **Domain Layer**: entities, repository traits, validation and moderation
//! - **Application Layer**: user and chirp services, DTOs
//! - **Infrastructure Layer**: PostgreSQL and in-memory repositories
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! chirpy/
//! +-- config/         Configuration management
//! +-- domain/         Entities, repository traits, content policy
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Database and repository implementations
//! +-- presentation/   HTTP routes, handlers, middleware
//! +-- shared/         Error types and validation helpers
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
