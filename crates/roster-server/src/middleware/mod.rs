//! Request middleware.

pub mod validate;

pub use validate::{ValidatedPayloads, ValidationStep, validate_request};
