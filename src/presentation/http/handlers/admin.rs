//! Admin Handlers
//!
//! Visit metrics page and the reset action.

use axum::{extract::State, http::StatusCode, response::Html};

use crate::shared::error::AppError;
use crate::startup::AppState;

/// Render the admin metrics page
pub fn metrics_page(hits: u64) -> String {
    format!(
        r#"<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {} times!</p>
  </body>
</html>"#,
        hits
    )
}

/// `GET /admin/metrics`
pub async fn metrics(State(state): State<AppState>) -> Html<String> {
    Html(metrics_page(state.visits.hits()))
}

/// `POST /admin/reset`
///
/// The visit counter is reset first and stays reset even if deleting users fails.
pub async fn reset(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let previous = state.visits.reset();
    tracing::info!(previous, "Visit counter reset");

    state.users.reset_users().await?;

    Ok(StatusCode::OK)
}
