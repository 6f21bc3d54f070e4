//! Axum route handlers for CV uploads.

use anyhow::anyhow;
use axum::{extract::Multipart, Json};
use serde::Serialize;
use tracing::info;

use crate::cv::extract::extract_text;
use crate::errors::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResponse {
    pub file_name: String,
    pub content: String,
    pub length: usize,
}

/// POST /api/v1/cv/extract
///
/// Accepts a multipart form with a `file` field and returns its plain text,
/// ready to be posted to /api/v1/jobs/match.
pub async fn handle_extract_cv(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("cv.pdf").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;

        info!("Extracting text from {file_name} ({} bytes)", data.len());

        // PDF parsing is CPU-bound.
        let name = file_name.clone();
        let content = tokio::task::spawn_blocking(move || extract_text(&name, &data))
            .await
            .map_err(|e| AppError::Internal(anyhow!("CV extraction task failed: {e}")))??;

        return Ok(Json(ExtractResponse {
            length: content.chars().count(),
            file_name,
            content,
        }));
    }

    Err(AppError::Validation("A 'file' field is required".to_string()))
}
