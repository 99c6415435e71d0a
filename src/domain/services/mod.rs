//! # Domain Services
//!
//! Pure functions that implement the content policy for chirp bodies.
//!
//! ## Services
//!
//! - **chirp_validation**: length rules for a submitted body
//! - **moderation**: masking of denylisted words
//!
//! A body always goes through validation before it is moderated;
//! [`screen_chirp`] runs both steps in that order.

mod chirp_validation;
mod moderation;

pub use chirp_validation::*;
pub use moderation::*;

/// Validate a body and, if it is acceptable, return its moderated form.
pub fn screen_chirp(body: &str) -> Result<String, ChirpValidationError> {
    validate_chirp(body)?;
    Ok(clean_chirp(body))
}
