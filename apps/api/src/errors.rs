use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM is not configured")]
    LlmNotConfigured,

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("LLM rejected credentials: {0}")]
    LlmUnauthorized(String),

    #[error("LLM error: {0}")]
    Llm(String),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        if matches!(e, LlmError::MissingApiKey) {
            AppError::LlmNotConfigured
        } else if e.is_rate_limit() {
            AppError::RateLimited(e.to_string())
        } else if e.is_unauthorized() {
            AppError::LlmUnauthorized(e.to_string())
        } else {
            AppError::Llm(e.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::LlmNotConfigured => {
                tracing::error!("Generation requested but LLAMA_API_KEY is not set");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_NOT_CONFIGURED",
                    "LLAMA_API_KEY is not configured. Add it to your .env file.".to_string(),
                )
            }
            AppError::RateLimited(msg) => {
                tracing::warn!("LLM rate limit: {msg}");
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    "RATE_LIMITED",
                    "Llama API rate limit exceeded. Please try again in a moment.".to_string(),
                )
            }
            AppError::LlmUnauthorized(msg) => {
                tracing::error!("LLM credentials rejected: {msg}");
                (
                    StatusCode::UNAUTHORIZED,
                    "LLM_UNAUTHORIZED",
                    "Invalid Llama API key. Check LLAMA_API_KEY in .env".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "Failed to generate cover letter".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
