use std::sync::Arc;

use crate::backend::RecordSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Record source. Default: `BackendClient`; tests swap in an in-memory source.
    pub records: Arc<dyn RecordSource>,
}
