//! Schema validation as axum middleware.
//!
//! A [`ValidationStep`] names one schema and one request part. Applied with
//! `axum::middleware::from_fn_with_state(step, validate_request)`, it rejects
//! invalid payloads with 400 `VALIDATION_FAILED`, answers 500
//! `VALIDATION_ERROR` when validation itself cannot run, and otherwise stores
//! the normalized payload in [`ValidatedPayloads`] before forwarding.
//!
//! Path parameters are only visible once routing has matched, so steps
//! targeting [`ValidationTarget::Params`] must be layered on the handler or
//! method router, not on the outer `Router`.

use std::collections::HashMap;
use std::sync::Arc;

use axum::RequestPartsExt;
use axum::body::{Body, Bytes};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, Request, State};
use axum::http::{HeaderMap, HeaderValue, header, request::Parts};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};

use roster_schema::{SchemaRegistry, ValidationTarget};

use crate::error::ApiError;

/// Upper bound on a request body read for validation.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// One schema applied to one part of the request.
#[derive(Clone)]
pub struct ValidationStep {
    registry: Arc<SchemaRegistry>,
    schema: Arc<str>,
    target: ValidationTarget,
}

impl ValidationStep {
    pub fn new(
        registry: Arc<SchemaRegistry>,
        schema: impl Into<Arc<str>>,
        target: ValidationTarget,
    ) -> Self {
        Self {
            registry,
            schema: schema.into(),
            target,
        }
    }

    pub fn body(registry: Arc<SchemaRegistry>, schema: impl Into<Arc<str>>) -> Self {
        Self::new(registry, schema, ValidationTarget::Body)
    }

    pub fn params(registry: Arc<SchemaRegistry>, schema: impl Into<Arc<str>>) -> Self {
        Self::new(registry, schema, ValidationTarget::Params)
    }

    pub fn query(registry: Arc<SchemaRegistry>, schema: impl Into<Arc<str>>) -> Self {
        Self::new(registry, schema, ValidationTarget::Query)
    }

    #[must_use]
    pub fn schema(&self) -> &str {
        &self.schema
    }

    #[must_use]
    pub const fn target(&self) -> ValidationTarget {
        self.target
    }
}

/// Normalized payloads accepted so far, one slot per request part.
///
/// Stored in the request extensions; several steps on one route fill
/// different slots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedPayloads {
    pub body: Option<Value>,
    pub params: Option<Value>,
    pub query: Option<Value>,
}

impl ValidatedPayloads {
    #[must_use]
    pub const fn get(&self, target: ValidationTarget) -> Option<&Value> {
        match target {
            ValidationTarget::Body => self.body.as_ref(),
            ValidationTarget::Params => self.params.as_ref(),
            ValidationTarget::Query => self.query.as_ref(),
        }
    }

    fn set(&mut self, target: ValidationTarget, payload: Value) {
        let slot = match target {
            ValidationTarget::Body => &mut self.body,
            ValidationTarget::Params => &mut self.params,
            ValidationTarget::Query => &mut self.query,
        };
        *slot = Some(payload);
    }
}

/// Middleware body for a [`ValidationStep`].
pub async fn validate_request(
    State(step): State<ValidationStep>,
    request: Request,
    next: Next,
) -> Response {
    match run_step(&step, request).await {
        Ok(request) => next.run(request).await,
        Err(error) => {
            if let ApiError::ValidationUnavailable(ref reason) = error {
                tracing::error!(
                    schema = step.schema(),
                    target = %step.target(),
                    %reason,
                    "validation step failed"
                );
            }
            error.into_response()
        }
    }
}

async fn run_step(step: &ValidationStep, request: Request) -> Result<Request, ApiError> {
    let (mut parts, body) = request.into_parts();

    let (mut payload, body) = match step.target {
        ValidationTarget::Body => {
            let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
                .await
                .map_err(|e| ApiError::ValidationFailed(vec![format!("root: {e}")]))?;
            if !is_blank(&bytes) && !is_json_content_type(&parts.headers) {
                return Err(ApiError::ValidationFailed(vec![
                    "root: expected application/json body".to_string(),
                ]));
            }
            (parse_body(&bytes)?, None)
        }
        ValidationTarget::Params => (path_params(&mut parts).await?, Some(body)),
        ValidationTarget::Query => (query_params(&parts)?, Some(body)),
    };

    let result = step
        .registry
        .validate(&step.schema, &mut payload)
        .map_err(|e| ApiError::ValidationUnavailable(e.to_string()))?;

    if !result.is_valid {
        tracing::debug!(
            schema = step.schema(),
            target = %step.target,
            errors = result.errors.len(),
            "request rejected"
        );
        return Err(ApiError::ValidationFailed(result.errors));
    }

    let body = match body {
        Some(body) => body,
        None => {
            let bytes = serde_json::to_vec(&payload)
                .map_err(|e| ApiError::ValidationUnavailable(e.to_string()))?;
            parts.headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
            parts.headers.insert(header::CONTENT_LENGTH, HeaderValue::from(bytes.len()));
            Body::from(bytes)
        }
    };

    let mut payloads = parts
        .extensions
        .remove::<ValidatedPayloads>()
        .unwrap_or_default();
    payloads.set(step.target, payload);
    parts.extensions.insert(payloads);

    Ok(Request::from_parts(parts, body))
}

fn is_blank(bytes: &Bytes) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}

/// `application/json` or any `application/*+json`, parameters ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// An empty body validates as `{}`; malformed JSON is the caller's fault.
fn parse_body(bytes: &Bytes) -> Result<Value, ApiError> {
    if is_blank(bytes) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(bytes)
        .map_err(|e| ApiError::ValidationFailed(vec![format!("root: invalid JSON body: {e}")]))
}

async fn path_params(parts: &mut Parts) -> Result<Value, ApiError> {
    match parts.extract::<Path<HashMap<String, String>>>().await {
        Ok(Path(params)) => Ok(string_map(params)),
        Err(PathRejection::MissingPathParams(_)) => Ok(Value::Object(Map::new())),
        Err(rejection) => Err(ApiError::ValidationFailed(vec![format!(
            "root: {}",
            rejection.body_text()
        )])),
    }
}

fn query_params(parts: &Parts) -> Result<Value, ApiError> {
    let Query(params) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
        .map_err(|rejection| {
            ApiError::ValidationFailed(vec![format!("root: {}", rejection.body_text())])
        })?;
    Ok(string_map(params))
}

fn string_map(map: HashMap<String, String>) -> Value {
    Value::Object(
        map.into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn empty_body_is_empty_object() {
        assert_eq!(parse_body(&Bytes::new()).unwrap(), json!({}));
        assert_eq!(parse_body(&Bytes::from_static(b"  \n")).unwrap(), json!({}));
    }

    #[test]
    fn malformed_body_is_user_error() {
        let err = parse_body(&Bytes::from_static(b"{\"email\":")).unwrap_err();
        match err {
            ApiError::ValidationFailed(details) => {
                assert_eq!(details.len(), 1);
                assert!(details[0].starts_with("root: "), "{details:?}");
            }
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn json_content_types_are_recognized() {
        let mut headers = HeaderMap::new();
        assert!(!is_json_content_type(&headers));

        for (value, expected) in [
            ("application/json", true),
            ("application/json; charset=utf-8", true),
            ("Application/JSON", true),
            ("application/merge-patch+json", true),
            ("text/plain", false),
            ("application/x-www-form-urlencoded", false),
        ] {
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(value));
            assert_eq!(is_json_content_type(&headers), expected, "{value}");
        }
    }

    #[test]
    fn query_values_stay_strings() {
        let (parts, ()) = axum::http::Request::builder()
            .uri("/users?page=2&sortBy=email")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(
            query_params(&parts).unwrap(),
            json!({"page": "2", "sortBy": "email"})
        );
    }

    #[test]
    fn payload_slots_are_independent() {
        let mut payloads = ValidatedPayloads::default();
        payloads.set(ValidationTarget::Params, json!({"id": "1"}));
        payloads.set(ValidationTarget::Body, json!({"firstName": "Al"}));
        assert_eq!(payloads.get(ValidationTarget::Params), Some(&json!({"id": "1"})));
        assert_eq!(payloads.get(ValidationTarget::Body), Some(&json!({"firstName": "Al"})));
        assert!(payloads.get(ValidationTarget::Query).is_none());
    }
}
