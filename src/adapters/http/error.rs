//! Shared HTTP error mapping.
//!
//! Domain errors carry an `ErrorCode`; this module maps each code
//! category onto a status code and a JSON body.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// API error that implements IntoResponse.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    /// 400 with a free-form message, for malformed path/query input.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse {
                code: "BAD_REQUEST".to_string(),
                message: message.into(),
                details: None,
            },
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        let status = if error.code.is_not_found() {
            StatusCode::NOT_FOUND
        } else if error.code.is_conflict() {
            StatusCode::CONFLICT
        } else if error.code == ErrorCode::ValidationFailed {
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!(code = %error.code, message = %error.message, "internal_error");
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let details = if error.details.is_empty() {
            None
        } else {
            serde_json::to_value(&error.details).ok()
        };

        Self {
            status,
            body: ErrorResponse {
                code: error.code.to_string(),
                message: error.message,
                details,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_for(code: ErrorCode) -> StatusCode {
        ApiError::from(DomainError::new(code, "test")).status
    }

    #[test]
    fn not_found_codes_map_to_404() {
        assert_eq!(status_for(ErrorCode::BookNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorCode::SessionNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorCode::GoalNotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn conflict_codes_map_to_409() {
        assert_eq!(status_for(ErrorCode::DuplicateSession), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorCode::DuplicateGoal), StatusCode::CONFLICT);
    }

    #[test]
    fn validation_maps_to_400() {
        assert_eq!(
            status_for(ErrorCode::ValidationFailed),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn infrastructure_codes_map_to_500() {
        assert_eq!(
            status_for(ErrorCode::DatabaseError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(ErrorCode::CacheError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn body_carries_code_and_message() {
        let error = ApiError::from(DomainError::new(ErrorCode::BookNotFound, "Book not found"));
        assert_eq!(error.body.code, "BOOK_NOT_FOUND");
        assert_eq!(error.body.message, "Book not found");
    }
}
