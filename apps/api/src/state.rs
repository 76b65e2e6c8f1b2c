use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Production uses `OpenAiClient`; tests
    /// substitute a canned backend.
    pub llm: Arc<dyn CompletionBackend>,
    pub config: Config,
}
