//! Validation Utilities

use validator::ValidationErrors;

use super::error::AppError;

/// Convert request DTO validation errors to AppError
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let text = e.message.clone().map(|m| m.to_string()).unwrap_or_default();
                format!("{}: {}", field, text)
            })
        })
        .next()
        .unwrap_or_else(|| "Validation failed".into());

    AppError::BadRequest(message)
}
