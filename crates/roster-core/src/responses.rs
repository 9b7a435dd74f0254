//! JSON response envelopes returned by every Roster endpoint.
//!
//! Successful responses use `{ "success": true, "data": ... }`, failures use
//! `{ "success": false, "error": { "message", "code"?, "details"? } }`.
//! The shapes are mirrored by the `successResponse` and `errorResponse`
//! schema documents in `roster-schema`.

use serde::{Deserialize, Serialize};

/// Error code for a request payload that failed its schema.
pub const CODE_VALIDATION_FAILED: &str = "VALIDATION_FAILED";
/// Error code for a validation step that could not run (unknown schema, bad schema).
pub const CODE_VALIDATION_ERROR: &str = "VALIDATION_ERROR";
/// Error code for a missing resource or route.
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
/// Error code for a unique-constraint conflict on create or update.
pub const CODE_USER_EXISTS: &str = "USER_EXISTS";
/// Error code for unexpected server-side failures.
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// Envelope for a successful response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> SuccessResponse<T> {
    pub const fn new(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
        }
    }
}

impl SuccessResponse<()> {
    /// A bare `{ "success": true }` acknowledgement.
    pub const fn empty() -> Self {
        Self {
            success: true,
            data: None,
        }
    }
}

/// Body of the `error` member of an [`ErrorResponse`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

/// Envelope for a failed response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorBody,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorBody {
                message: message.into(),
                code: None,
                details: None,
            },
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.error.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.error.details = Some(details);
        self
    }

    /// The 400 body produced when a payload fails its schema.
    pub fn validation_failed(details: Vec<String>) -> Self {
        Self::new("Validation Error")
            .with_code(CODE_VALIDATION_FAILED)
            .with_details(details)
    }

    /// The 500 body produced when validation itself could not run.
    pub fn validation_error() -> Self {
        Self::new("Internal validation error").with_code(CODE_VALIDATION_ERROR)
    }
}
