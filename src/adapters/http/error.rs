//! Error responses shared by every HTTP adapter.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Standard error response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// A domain error on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat
            | ErrorCode::InvalidCycle => StatusCode::BAD_REQUEST,
            ErrorCode::ExerciseNotFound => StatusCode::NOT_FOUND,
            ErrorCode::InvalidStateTransition
            | ErrorCode::SequencerAlreadyRunning
            | ErrorCode::SessionInapplicable => StatusCode::CONFLICT,
            ErrorCode::CatalogUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.0.code
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = %self.0.code, message = %self.0.message, "request failed");
        }

        let body = if self.0.details.is_empty() {
            ErrorResponse::new(self.0.code.to_string(), self.0.message)
        } else {
            let details = serde_json::to_value(&self.0.details).unwrap_or_default();
            ErrorResponse::with_details(self.0.code.to_string(), self.0.message, details)
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from(DomainError::new(ErrorCode::ExerciseNotFound, "missing"));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_error_maps_to_400() {
        let err = ApiError::from(ValidationError::invalid_format("slug", "bad"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn inapplicable_session_maps_to_409() {
        let err = ApiError::from(DomainError::new(ErrorCode::SessionInapplicable, "too short"));
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn catalog_failure_maps_to_503() {
        let err = ApiError::from(DomainError::new(ErrorCode::CatalogUnavailable, "down"));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn error_response_serializes_without_details_when_none() {
        let json = serde_json::to_string(&ErrorResponse::new("EXERCISE_NOT_FOUND", "Not found")).unwrap();
        assert!(!json.contains("details"));
        assert!(json.contains("\"error_code\":\"EXERCISE_NOT_FOUND\""));
    }
}
