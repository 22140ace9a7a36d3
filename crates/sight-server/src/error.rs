//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use sight_db::error::DatabaseError;
use thiserror::Error;

/// Errors returned by record handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// Store or lifecycle-hook failure. The message is logged, not returned.
    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl ApiError {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }
}

impl From<DatabaseError> for ApiError {
    fn from(e: DatabaseError) -> Self {
        match e {
            DatabaseError::NoResult => Self::NotFound("The requested resource wasn't found.".into()),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            Self::Internal(detail) => {
                tracing::error!(%detail, "request failed");
                "Something went wrong while processing your request.".to_string()
            }
            Self::NotFound(message) | Self::BadRequest(message) => message,
        };
        (
            status,
            Json(ErrorBody {
                code: status.as_u16(),
                message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use sight_core::errors::CoreError;

    use super::*;

    #[test]
    fn no_result_is_404() {
        assert_eq!(
            ApiError::from(DatabaseError::NoResult).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn hook_failure_is_500() {
        let err = ApiError::from(DatabaseError::Hook(CoreError::Timeout {
            operation: "spatial upsert",
            timeout_ms: 10,
        }));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
