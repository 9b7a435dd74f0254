//! # roster-schema
//!
//! JSON Schema documents and the validation registry for Roster.
//!
//! This crate provides:
//! - [`documents`]: the declarative request and response schemas
//! - [`SchemaRegistry`]: name → compiled validator, built once at startup
//! - [`ValidationResult`] / [`ValidationTarget`]: the validation contract used
//!   by the HTTP middleware
//!
//! ## Normalization
//!
//! Validation is not a pure accept/reject check. Before the schema is
//! evaluated the payload is normalized in place: properties not declared by
//! an object schema with `additionalProperties: false` are removed, and
//! absent properties that declare a `default` receive it. See [`normalize`].

pub mod documents;
mod error;
pub mod normalize;
mod registry;
mod result;

pub use error::SchemaError;
pub use registry::{CompiledSchema, SchemaRegistry};
pub use result::{ValidationResult, ValidationTarget};
