use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the parsing pipeline.
///
/// Heuristic misses (no name, no skills section, ...) are never errors; they
/// show up as empty fields on a successful `ParsedResume`.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Extension outside `{pdf, docx, doc}`. Deterministic, not retryable.
    #[error("Unsupported file type: '{0}'")]
    UnsupportedFormat(String),

    /// Corrupt document or extraction library fault. The original cause is
    /// kept as the error source.
    #[error("Failed to parse document: {0}")]
    ParseFailure(#[source] anyhow::Error),
}

impl ParseError {
    pub fn failure(err: impl Into<anyhow::Error>) -> Self {
        ParseError::ParseFailure(err.into())
    }
}

/// Application-level error type for the upload transport.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Parsing timed out after {0}s")]
    Timeout(u64),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Parse(ParseError::UnsupportedFormat(_)) => (
                StatusCode::BAD_REQUEST,
                "UNSUPPORTED_FORMAT",
                self.to_string(),
            ),
            AppError::Parse(ParseError::ParseFailure(e)) => {
                tracing::error!("Parse failure: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PARSE_FAILURE",
                    format!("An error occurred during parsing: {e}"),
                )
            }
            AppError::Timeout(secs) => {
                tracing::error!("Parse timed out after {secs}s");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PARSE_TIMEOUT",
                    self.to_string(),
                )
            }
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
