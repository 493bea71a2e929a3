use std::sync::Arc;

use crate::llm_client::CompletionModel;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The completion model is held behind a trait object so tests can swap in a
/// canned backend without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn CompletionModel>,
}
