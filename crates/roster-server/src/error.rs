//! API error type and its JSON rendering.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use roster_core::responses::{
    CODE_INTERNAL_ERROR, CODE_NOT_FOUND, CODE_USER_EXISTS, ErrorResponse,
};
use roster_db::error::DatabaseError;

/// Every failure a handler or middleware can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request payload failed its schema (400).
    #[error("validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    /// Validation could not run at all (500).
    #[error("validation unavailable: {0}")]
    ValidationUnavailable(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    /// Unexpected server-side failure. The detail is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::ValidationUnavailable(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn body(self) -> ErrorResponse {
        match self {
            Self::ValidationFailed(details) => ErrorResponse::validation_failed(details),
            Self::ValidationUnavailable(_) => ErrorResponse::validation_error(),
            Self::NotFound(message) => ErrorResponse::new(message).with_code(CODE_NOT_FOUND),
            Self::Conflict(message) => ErrorResponse::new(message).with_code(CODE_USER_EXISTS),
            Self::Internal(_) => {
                ErrorResponse::new("Internal server error").with_code(CODE_INTERNAL_ERROR)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Internal(ref detail) = self {
            tracing::error!(%detail, "request failed");
        }
        (status, Json(self.body())).into_response()
    }
}

impl From<DatabaseError> for ApiError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::Conflict(_) => {
                Self::Conflict("User with this email already exists".to_string())
            }
            other => Self::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn conflict_maps_to_409_user_exists() {
        let err = ApiError::from(DatabaseError::Conflict("UNIQUE constraint failed".into()));
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.body().error.code.as_deref(), Some(CODE_USER_EXISTS));
    }

    #[test]
    fn database_failure_hides_detail() {
        let err = ApiError::from(DatabaseError::Query("disk on fire".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = err.body();
        assert_eq!(body.error.message, "Internal server error");
        assert_eq!(body.error.code.as_deref(), Some(CODE_INTERNAL_ERROR));
    }

    #[test]
    fn validation_failed_carries_details() {
        let err = ApiError::ValidationFailed(vec!["email: bad".into()]);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body(), ErrorResponse::validation_failed(vec!["email: bad".into()]));
    }

    #[test]
    fn validation_unavailable_is_generic_500() {
        let err = ApiError::ValidationUnavailable("schema missing".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body(), ErrorResponse::validation_error());
    }
}
