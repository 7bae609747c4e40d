use std::sync::Arc;

use crate::matching::matcher::CvMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; read-only for the lifetime of the process.
    pub matcher: Arc<CvMatcher>,
}
