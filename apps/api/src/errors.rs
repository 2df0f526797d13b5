use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The analysis pipeline never logs, retries, or suppresses these on its own;
/// they propagate unmodified to the HTTP layer, which translates them here.
#[derive(Debug, Error)]
pub enum AppError {
    /// The uploaded document is neither a PDF nor a DOCX. Not retryable —
    /// the user must resupply the file in a supported format.
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The document claims a supported format but its content is corrupt
    /// or unreadable. Not retryable.
    #[error("Failed to extract text: {0}")]
    Extraction(String),

    /// The analysis exceeded its processing budget. Retryable with a
    /// smaller document or a relaxed budget.
    #[error("Analysis timed out after {0}s")]
    Timeout(u64),

    /// The caller supplied no keywords; the match score would be a
    /// division by zero.
    #[error("Keyword list must not be empty")]
    EmptyKeywordSet,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::UnsupportedFormat(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FORMAT",
                msg.clone(),
            ),
            AppError::Extraction(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EXTRACTION_FAILURE",
                msg.clone(),
            ),
            AppError::Timeout(_) => (
                StatusCode::GATEWAY_TIMEOUT,
                "ANALYSIS_TIMEOUT",
                self.to_string(),
            ),
            AppError::EmptyKeywordSet => (
                StatusCode::BAD_REQUEST,
                "EMPTY_KEYWORD_SET",
                self.to_string(),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
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
