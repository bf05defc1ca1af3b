use crate::llm_client::LlmClient;

/// Shared application state injected into route handlers via Axum extractors.
///
/// Prompt templates are `'static` data and need no slot here; the completion
/// client is the only per-process handle.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
}
