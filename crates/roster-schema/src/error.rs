//! Schema registry error types.

use thiserror::Error;

/// Errors from the schema registry.
///
/// None of these describe a bad payload: a payload that fails its schema is
/// reported through [`crate::ValidationResult`]. These are configuration
/// errors and map to a 500-class response.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was never registered.
    #[error("Schema validator '{0}' not found")]
    NotFound(String),

    /// The schema document could not be compiled.
    #[error("Schema '{name}' failed to compile: {reason}")]
    Compile { name: String, reason: String },
}
