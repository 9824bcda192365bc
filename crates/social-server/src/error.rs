//! API error types and response formatting.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use social_core::SocialError;

/// API error type that converts to appropriate HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request did not match the declared schema.
    #[error("validation failed ({location}): {message}")]
    Validation {
        location: &'static str,
        message: String,
    },

    /// Referenced resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal server error (storage, etc.).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SocialError> for ApiError {
    fn from(err: SocialError) -> Self {
        match err {
            SocialError::PostNotFound(id) => {
                tracing::warn!("Post {} not found", id);
                Self::NotFound("Post not found".to_string())
            }
            SocialError::Storage(msg) => Self::Internal(anyhow::anyhow!(msg)),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation {
            location: "body",
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation {
            location: "path",
            message: rejection.body_text(),
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    detail: ErrorDetail,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ErrorDetail {
    Message(String),
    Issues(Vec<ValidationIssue>),
}

#[derive(Debug, Serialize)]
struct ValidationIssue {
    loc: &'static str,
    msg: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            Self::Validation { location, message } => ErrorDetail::Issues(vec![ValidationIssue {
                loc: location,
                msg: message,
            }]),
            Self::NotFound(msg) => ErrorDetail::Message(msg),
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                ErrorDetail::Message("An internal error occurred".to_string())
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
