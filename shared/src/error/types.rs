//! Error type and response body

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }
}

/// Error response body
///
/// ```json
/// { "code": 3, "message": "Route not found", "details": { "resource": "Route" } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        if status.is_server_error() {
            tracing::error!(code = %self.code, message = %self.message, "Server error occurred");
        }

        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::with_message(ErrorCode::InvalidRequest, "Body must be a JSON object")
            .with_detail("field", "supplierCode");

        assert_eq!(err.code, ErrorCode::InvalidRequest);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "supplierCode");
    }

    #[test]
    fn test_app_error_http_status() {
        assert_eq!(
            AppError::not_found("Route").http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::with_message(ErrorCode::SequenceGenerationFailed, "x").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::UnknownCodeDomain, "Unknown code domain: x");
        assert_eq!(format!("{}", err), "Unknown code domain: x");
    }

    #[test]
    fn test_error_response_body() {
        let err = AppError::not_found("Route");
        let json = serde_json::to_value(ErrorResponse::from(&err)).unwrap();

        assert_eq!(json["code"], 3);
        assert_eq!(json["message"], "Route not found");
        assert_eq!(json["details"]["resource"], "Route");
    }
}
