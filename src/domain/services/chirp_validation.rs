//! Chirp body length rules.

/// Longest accepted body, in characters.
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Why a chirp body was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChirpValidationError {
    #[error("Chirp is too long")]
    TooLong,

    #[error("Chirp is empty")]
    Empty,
}

/// Check a body against the length rules.
///
/// Length is counted in characters, not bytes. Whitespace counts, so a body
/// made only of spaces is accepted here.
pub fn validate_chirp(body: &str) -> Result<(), ChirpValidationError> {
    if body.is_empty() {
        return Err(ChirpValidationError::Empty);
    }
    if body.chars().count() > MAX_CHIRP_LENGTH {
        return Err(ChirpValidationError::TooLong);
    }
    Ok(())
}
