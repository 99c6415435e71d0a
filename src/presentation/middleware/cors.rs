//! CORS Middleware Configuration
//!
//! Browsers may call the API and admin routes from the configured origins.
//! Only the methods the router serves are advertised, and `Content-Type` is
//! the only request header chirp and user bodies need.

use std::time::Duration;

use axum::http::{header, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::CorsSettings;

/// Methods exposed by the router
pub const ALLOWED_METHODS: [Method; 3] = [Method::GET, Method::POST, Method::HEAD];

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(3600);

/// Create CORS layer from settings
pub fn create_cors_layer(settings: &CorsSettings) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin(settings))
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE])
        .max_age(PREFLIGHT_MAX_AGE)
}

/// Configured origins; an empty or unparsable list allows any origin.
fn allowed_origin(settings: &CorsSettings) -> AllowOrigin {
    let origins: Vec<_> = settings
        .allowed_origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    }
}
