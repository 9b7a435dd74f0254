//! Central schema registry: schema name → compiled validator.
//!
//! The registry is built once at startup and shared read-only (typically as
//! `Arc<SchemaRegistry>`). Validation takes `&self` and touches no shared
//! mutable state, so concurrent requests need no synchronization.

use std::collections::HashMap;

use jsonschema::{Draft, ValidationError, Validator};
use serde_json::Value;

use crate::documents;
use crate::error::SchemaError;
use crate::normalize::normalize;
use crate::result::ValidationResult;

/// A schema document together with its compiled validator.
pub struct CompiledSchema {
    document: Value,
    validator: Validator,
}

impl CompiledSchema {
    /// Compile a schema document (draft 7, format assertions enabled).
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Compile` if the document is not a valid schema.
    pub fn compile(name: &str, document: Value) -> Result<Self, SchemaError> {
        let validator = jsonschema::options()
            .with_draft(Draft::Draft7)
            .should_validate_formats(true)
            .build(&document)
            .map_err(|e| SchemaError::Compile {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            document,
            validator,
        })
    }

    /// The source document this validator was compiled from.
    #[must_use]
    pub const fn document(&self) -> &Value {
        &self.document
    }

    /// Normalize `data` in place, then collect every violation.
    pub fn validate(&self, data: &mut Value) -> ValidationResult {
        normalize(&self.document, data);

        let errors: Vec<String> = self
            .validator
            .iter_errors(data)
            .map(|e| format!("{}: {e}", field_label(&e)))
            .collect();

        ValidationResult::from_errors(errors)
    }
}

/// Label for a violation: instance path without its leading `/`, else the
/// `#`-anchored schema path, else `root`.
fn field_label(error: &ValidationError<'_>) -> String {
    let instance_path = error.instance_path.to_string();
    let instance_path = instance_path.strip_prefix('/').unwrap_or(&instance_path);
    if !instance_path.is_empty() {
        return instance_path.to_string();
    }

    let schema_path = error.schema_path.to_string();
    if !schema_path.is_empty() {
        return format!("#{schema_path}");
    }

    "root".to_string()
}

/// Mapping from schema name to compiled validator.
///
/// Re-registering a name replaces the previous validator (last write wins).
#[derive(Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, CompiledSchema>,
}

impl SchemaRegistry {
    /// Build a registry containing every document in [`documents::builtin`].
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Compile` if a built-in document fails to compile.
    pub fn new() -> Result<Self, SchemaError> {
        let mut registry = Self::empty();
        for (name, document) in documents::builtin() {
            registry.register(name, document)?;
        }
        tracing::debug!(count = registry.schema_count(), "schema registry built");
        Ok(registry)
    }

    /// A registry with no schemas.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile and register a schema under `name`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Compile` if the document is not a valid schema.
    /// The registry is left unchanged in that case.
    pub fn register(&mut self, name: impl Into<String>, document: Value) -> Result<(), SchemaError> {
        let name = name.into();
        let compiled = CompiledSchema::compile(&name, document)?;
        if self.schemas.insert(name.clone(), compiled).is_some() {
            tracing::debug!(schema = %name, "replaced existing schema");
        }
        Ok(())
    }

    /// Validate (and normalize in place) a JSON value against a named schema.
    ///
    /// A payload that fails its schema is *not* an error: it is reported as
    /// `Ok(ValidationResult { is_valid: false, .. })`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown.
    pub fn validate(&self, name: &str, data: &mut Value) -> Result<ValidationResult, SchemaError> {
        let compiled = self
            .schemas
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;
        Ok(compiled.validate(data))
    }

    /// Get a schema document by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name).map(CompiledSchema::document)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// List all registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}
