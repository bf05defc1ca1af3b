use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Bodies are plain text, not JSON: the generate endpoint's failure contract
/// is a single human-readable line, matching what the letter form displays.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("completion error: {0}")]
    Llm(#[from] LlmError),

    #[error("render error: {0}")]
    Render(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Llm(e) => {
                tracing::error!("Completion API error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error generating letter: {e}"),
                )
                    .into_response()
            }
            AppError::Render(e) => {
                tracing::error!("PDF render error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error rendering letter PDF".to_string(),
                )
                    .into_response()
            }
        }
    }
}
