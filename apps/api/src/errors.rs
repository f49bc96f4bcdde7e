use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::error::EngineError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Engine(EngineError::InvalidArgument(msg)) => {
                (StatusCode::BAD_REQUEST, "INVALID_ARGUMENT", msg.clone())
            }
            AppError::Engine(EngineError::ExtractionFailed(msg)) => {
                (StatusCode::BAD_REQUEST, "EXTRACTION_FAILED", msg.clone())
            }
            AppError::Engine(EngineError::ComputationFault(msg)) => {
                tracing::error!("Computation fault: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "COMPUTATION_FAULT",
                    "The scoring engine is misconfigured".to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_maps_to_400() {
        let response = AppError::from(EngineError::InvalidArgument("x".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_extraction_failed_maps_to_400() {
        let response = AppError::from(EngineError::ExtractionFailed("x".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_computation_fault_maps_to_500() {
        let response = AppError::from(EngineError::ComputationFault("x".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
