//! HTTP errors of the sequence code endpoints
//!
//! Previews and code assignment answer with differently shaped bodies, both
//! consumed as-is by the dashboard:
//!
//! | Variant | Error code | Status | Body |
//! |---------|------------|--------|------|
//! | `Preview` | 6002 | 500 | `{"error": "Failed to get <domain> code"}` |
//! | `Listing` | 6002 | 500 | `{"error": "Failed to list <domain> counters"}` |
//! | `UnknownDomain` | 6003 | 400 | `{"error": "Unknown code domain: <x>"}` |
//! | `Assign` | 6001 | 500 | `{"message": "Failed to generate <domain> code"}` |
//! | `InvalidBody` | 5 | 400 | `{"message": "..."}` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use shared::error::{AppError, ErrorCode};

use crate::sequence::SequenceError;

#[derive(Debug, thiserror::Error)]
pub enum CodeApiError {
    // ========== Previews ({"error"}) ==========
    #[error("Failed to get {} code", .0.domain().label())]
    Preview(#[source] SequenceError),

    #[error("Failed to list {} counters", .0.domain().label())]
    Listing(#[source] SequenceError),

    #[error("{}", .0.message)]
    UnknownDomain(AppError),

    // ========== Code assignment ({"message"}) ==========
    #[error("Failed to generate {} code", .0.domain().label())]
    Assign(#[source] SequenceError),

    #[error("{0}")]
    InvalidBody(String),
}

impl CodeApiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CodeApiError::Preview(e) | CodeApiError::Listing(e) | CodeApiError::Assign(e) => {
                e.code()
            }
            CodeApiError::UnknownDomain(e) => e.code,
            CodeApiError::InvalidBody(_) => ErrorCode::InvalidRequest,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.code().http_status()
    }
}

impl IntoResponse for CodeApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(code = %self.code(), message = %message, "Sequence request failed");
        }

        let body = match &self {
            CodeApiError::Preview(_) | CodeApiError::Listing(_) | CodeApiError::UnknownDomain(_) => {
                json!({ "error": message })
            }
            CodeApiError::Assign(_) | CodeApiError::InvalidBody(_) => json!({ "message": message }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::StoreError;
    use shared::models::CodeDomain;

    fn generation_failure(domain: CodeDomain) -> SequenceError {
        SequenceError::Generation {
            domain,
            source: StoreError::NoDocument { domain, year: 2025 },
        }
    }

    fn read_failure(domain: CodeDomain) -> SequenceError {
        SequenceError::StoreRead {
            domain,
            source: StoreError::NoDocument { domain, year: 2025 },
        }
    }

    #[test]
    fn test_messages_use_domain_label() {
        let err = CodeApiError::Preview(read_failure(CodeDomain::TechnicianJob));
        assert_eq!(err.to_string(), "Failed to get technician job code");

        let err = CodeApiError::Assign(generation_failure(CodeDomain::Supplier));
        assert_eq!(err.to_string(), "Failed to generate supplier code");
    }

    #[test]
    fn test_sequence_failures_carry_shared_codes() {
        let err = CodeApiError::Assign(generation_failure(CodeDomain::Supplier));
        assert_eq!(err.code(), ErrorCode::SequenceGenerationFailed);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = CodeApiError::Preview(read_failure(CodeDomain::Ticket));
        assert_eq!(err.code(), ErrorCode::SequenceReadFailed);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = CodeApiError::Listing(read_failure(CodeDomain::Quotation));
        assert_eq!(err.code(), ErrorCode::SequenceReadFailed);
    }

    #[test]
    fn test_client_errors_are_400() {
        let err = CodeApiError::InvalidBody("Request body must be a JSON object".into());
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = CodeApiError::UnknownDomain("invoice".parse::<CodeDomain>().unwrap_err());
        assert_eq!(err.code(), ErrorCode::UnknownCodeDomain);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Unknown code domain: invoice");
    }
}
