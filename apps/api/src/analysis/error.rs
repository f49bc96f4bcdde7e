use thiserror::Error;

/// Errors produced by the scoring engine. Returned to the caller, never logged here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Missing or empty text, malformed skill records.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The text-extraction collaborator produced no usable text.
    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),

    /// Invalid engine configuration. Raised at construction, never mid-request.
    #[error("Computation fault: {0}")]
    ComputationFault(String),
}
