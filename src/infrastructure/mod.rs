//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database connection pool and migrations (PostgreSQL)
//! - Repository implementations (PostgreSQL and in-memory)

pub mod database;
pub mod repositories;
