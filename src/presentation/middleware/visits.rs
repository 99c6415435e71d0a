//! Visit Counter
//!
//! Process-wide count of requests to the static asset route. The counter is
//! owned by `AppState`; only the counting middleware and the admin reset
//! handler change it. It starts at zero and is not persisted.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Atomic hit counter
#[derive(Debug, Default)]
pub struct VisitCounter {
    hits: AtomicU64,
}

impl VisitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one visit
    pub fn record(&self) -> u64 {
        self.hits.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Current number of visits
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Set the count back to zero, returning the previous value
    pub fn reset(&self) -> u64 {
        self.hits.swap(0, Ordering::Relaxed)
    }
}

/// Middleware counting every request that reaches the wrapped routes
pub async fn count_visits(
    State(visits): State<Arc<VisitCounter>>,
    request: Request,
    next: Next,
) -> Response {
    let hits = visits.record();
    tracing::trace!(hits, path = %request.uri().path(), "Asset visit");
    next.run(request).await
}
