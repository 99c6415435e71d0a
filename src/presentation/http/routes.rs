//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use super::handlers;
use crate::presentation::middleware::count_visits;
use crate::startup::AppState;

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .nest("/admin", admin_routes())
        .merge(asset_routes(&state))
        .with_state(state)
}

/// Public API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(handlers::health::healthz))
        .route("/users", post(handlers::user::create_user))
        .route(
            "/chirps",
            get(handlers::chirp::list_chirps).post(handlers::chirp::create_chirp),
        )
        .route("/chirps/{chirp_id}", get(handlers::chirp::get_chirp))
        .route("/validate_chirp", post(handlers::chirp::validate_chirp))
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(handlers::admin::metrics))
        .route("/reset", post(handlers::admin::reset))
}

/// Static files, counted by the visit middleware
fn asset_routes(state: &AppState) -> Router<AppState> {
    let assets = &state.settings.assets;
    Router::new()
        .nest_service(&assets.path, ServeDir::new(&assets.dir))
        .route_layer(middleware::from_fn_with_state(
            state.visits.clone(),
            count_visits,
        ))
}
