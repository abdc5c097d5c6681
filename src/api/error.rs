//! Mapping from classified service errors to HTTP responses.

use crate::task::services::TaskServiceError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// JSON error body returned on every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure message.
    pub error: String,
}

/// HTTP-facing error: a status code plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Creates a 400 validation error from any displayable cause.
    #[must_use]
    pub fn validation(cause: impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: cause.to_string(),
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        let status = match &err {
            TaskServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            TaskServiceError::AlreadyExists(_) => StatusCode::CONFLICT,
            TaskServiceError::Domain(_) => StatusCode::BAD_REQUEST,
            TaskServiceError::Repository(cause) => {
                tracing::error!(error = %cause, "storage failure");
                return Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    // The underlying cause stays in the logs; callers only
                    // learn that the server failed.
                    message: "internal server error".to_owned(),
                };
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}
