//! Axum route handlers for document text extraction.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::UploadedDocument;
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub filename: Option<String>,
    pub text: String,
    pub char_count: usize,
}

/// POST /api/v1/extract
///
/// Accepts a multipart upload with a `file` field (PDF or plain text) and returns its text.
/// Documents without a text layer are rejected with `EXTRACTION_FAILED`.
pub async fn handle_extract(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    let mut document = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
        document = Some(UploadedDocument {
            filename,
            content_type,
            bytes,
        });
        break;
    }

    let document = document
        .ok_or_else(|| AppError::Validation(format!("multipart field '{FILE_FIELD}' is required")))?;

    let filename = document.filename.clone();
    let size = document.bytes.len();

    let text = state.extractor.extract(document).await.map_err(|e| {
        warn!(?filename, size, "Text extraction rejected: {e}");
        AppError::from(e)
    })?;

    let char_count = text.chars().count();
    info!(?filename, size, char_count, "Extracted document text");

    Ok(Json(ExtractResponse {
        filename,
        text,
        char_count,
    }))
}
