//! Validation outcome and request-part selector.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of validating one payload against one schema.
///
/// Serializes as `{ "isValid": bool, "errors"?: [string] }`; `errors` is
/// omitted when the payload is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// `"<field-or-root>: <message>"` entries, in the order they were detected.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ValidationResult {
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Valid iff `errors` is empty.
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Whether any error message starts with the given field label.
    #[must_use]
    pub fn has_error_for(&self, field: &str) -> bool {
        self.errors
            .iter()
            .any(|e| e.split_once(": ").is_some_and(|(label, _)| label == field))
    }
}

/// Which part of an inbound request a schema applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationTarget {
    /// The JSON-decoded request body.
    #[default]
    Body,
    /// Decoded path parameters.
    Params,
    /// Decoded query-string parameters.
    Query,
}

impl ValidationTarget {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Params => "params",
            Self::Query => "query",
        }
    }
}

impl fmt::Display for ValidationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
