//! Route handlers.

pub mod health;
pub mod users;

use crate::error::ApiError;

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}
