//! Text extraction — turns uploaded documents into plain text for the scoring engine.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>` so the backend can be swapped
//! (e.g. an OCR service for scanned PDFs) without touching handlers.

pub mod handlers;

use async_trait::async_trait;
use bytes::Bytes;

use crate::analysis::error::EngineError;

/// An uploaded file as received from a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedDocument {
    fn is_pdf(&self) -> bool {
        let by_type = self
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.eq_ignore_ascii_case("application/pdf"));
        let by_name = self
            .filename
            .as_deref()
            .is_some_and(|name| name.to_lowercase().ends_with(".pdf"));
        let by_magic = self.bytes.starts_with(b"%PDF");
        by_type || by_name || by_magic
    }
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns the document's text, or `ExtractionFailed` when none can be recovered.
    async fn extract(&self, document: UploadedDocument) -> Result<String, EngineError>;
}

/// PDFs go through `pdf-extract` on the blocking pool; anything else must be UTF-8 text.
pub struct DefaultTextExtractor;

#[async_trait]
impl TextExtractor for DefaultTextExtractor {
    async fn extract(&self, document: UploadedDocument) -> Result<String, EngineError> {
        if document.bytes.is_empty() {
            return Err(EngineError::ExtractionFailed("uploaded file is empty".to_string()));
        }

        let text = if document.is_pdf() {
            let bytes = document.bytes.clone();
            // pdf-extract is CPU-bound and may panic on malformed input; a panic
            // surfaces here as a JoinError.
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
                .await
                .map_err(|e| {
                    EngineError::ExtractionFailed(format!("PDF parser aborted: {e}"))
                })?
                .map_err(|e| EngineError::ExtractionFailed(format!("unreadable PDF: {e}")))?
        } else {
            String::from_utf8(document.bytes.to_vec()).map_err(|_| {
                EngineError::ExtractionFailed(
                    "file is neither a PDF nor UTF-8 text".to_string(),
                )
            })?
        };

        if text.trim().is_empty() {
            return Err(EngineError::ExtractionFailed(
                "document has no text layer (scanned image?)".to_string(),
            ));
        }

        Ok(text)
    }
}
