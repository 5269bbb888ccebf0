use std::time::Duration;

use anyhow::anyhow;
use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::{ParsedResume, RawDocument};
use crate::parser::parse_with;
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
const RESUME_FIELD: &str = "resume";

/// POST /api/parse-resume/
///
/// Unsupported extensions and a missing file are client errors (400);
/// extraction failures and timeouts are server errors (500). A readable
/// document with nothing recognizable still returns 200 with empty fields.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParsedResume>, AppError> {
    let document = read_resume_field(&mut multipart)
        .await?
        .ok_or_else(|| AppError::Validation("No resume file provided".to_string()))?;

    info!(
        filename = %document.filename,
        bytes = document.bytes.len(),
        "Received resume upload"
    );

    let recognizer = state.recognizer;
    let timeout_secs = state.config.parse_timeout_secs;

    // Extraction and matching are CPU-bound; keep them off the async workers.
    let task = tokio::task::spawn_blocking(move || parse_with(&document, recognizer));
    let resume = tokio::time::timeout(Duration::from_secs(timeout_secs), task)
        .await
        .map_err(|_| AppError::Timeout(timeout_secs))?
        .map_err(|e| AppError::Internal(anyhow!("Parse task failed: {e}")))??;

    Ok(Json(resume))
}

async fn read_resume_field(multipart: &mut Multipart) -> Result<Option<RawDocument>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        return Ok(Some(RawDocument::new(filename, bytes.to_vec())));
    }
    Ok(None)
}
