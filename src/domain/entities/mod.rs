//! # Domain Entities
//!
//! Both entities map directly to their database tables and are created once,
//! read many times and never updated.
//!
//! - **User**: an account identified by a unique email address
//! - **Chirp**: a short, already-moderated text post referencing a user
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer (PostgreSQL and an
//! in-memory store), following the dependency inversion principle.

mod chirp;
mod user;

pub use chirp::{Chirp, ChirpRepository};
pub use user::{User, UserRepository};

#[cfg(test)]
pub use chirp::MockChirpRepository;
#[cfg(test)]
pub use user::MockUserRepository;
