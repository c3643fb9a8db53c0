//! API error types and handling

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use quill_application::{ApplicationError, ValidationErrors};
use thiserror::Error;
use tracing::{error, warn};

use crate::models::{ErrorDetail, ErrorResponse, FieldError};

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed body, unparsable path or mismatched ids
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// The addressed resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Body sent without a JSON content type
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// One or more field rules failed
    #[error("Validation failed")]
    Validation(ValidationErrors),

    /// Storage or wiring failure
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Status code and machine-readable type for this error
    pub fn status_and_type(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::UnsupportedMediaType(_) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, "unsupported_media_type")
            }
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(errors) => {
                warn!("Request rejected by validation: {}", errors);
                ApiError::Validation(errors)
            }
            not_found @ ApplicationError::NotFound { .. } => {
                ApiError::NotFound(not_found.to_string())
            }
            other @ (ApplicationError::Repository(_) | ApplicationError::Configuration(_)) => {
                error!("Request failed: {}", other);
                ApiError::Internal(other.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Rejected request body: {}", rejection.body_text());
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::UnsupportedMediaType(rejection.body_text())
            }
            _ => ApiError::BadRequest(rejection.body_text()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        warn!("Rejected path parameter: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_type();

        let fields = match &self {
            ApiError::Validation(errors) => Some(
                errors
                    .failures()
                    .iter()
                    .map(|f| FieldError {
                        field: f.field.clone(),
                        message: f.message.clone(),
                    })
                    .collect(),
            ),
            _ => None,
        };

        let message = match &self {
            ApiError::Validation(errors) => format!("Validation failed: {errors}"),
            other => other.to_string(),
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                error_type: error_type.to_string(),
                message,
                fields,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
