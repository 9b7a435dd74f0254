//! Declarative schema documents registered by [`crate::SchemaRegistry::new`].
//!
//! These are plain data. Request schemas (`createUser`, `updateUser`,
//! `getUserByIdParams`, `paginationQuery`) gate inbound payloads; response
//! schemas (`errorResponse`, `successResponse`, `healthCheckResponse`)
//! describe the envelopes the server emits.

use serde_json::{Value, json};

pub const CREATE_USER: &str = "createUser";
pub const UPDATE_USER: &str = "updateUser";
pub const GET_USER_BY_ID_PARAMS: &str = "getUserByIdParams";
pub const PAGINATION_QUERY: &str = "paginationQuery";
pub const ERROR_RESPONSE: &str = "errorResponse";
pub const SUCCESS_RESPONSE: &str = "successResponse";
pub const HEALTH_CHECK_RESPONSE: &str = "healthCheckResponse";

/// Letters, whitespace and hyphens.
const NAME_PATTERN: &str = r"^[a-zA-Z\s\-]+$";
/// Positive integer without leading zeros, as a string.
const POSITIVE_INT_PATTERN: &str = r"^[1-9]\d*$";

/// Every built-in document, paired with its registry name.
#[must_use]
pub fn builtin() -> Vec<(&'static str, Value)> {
    vec![
        (CREATE_USER, create_user()),
        (UPDATE_USER, update_user()),
        (GET_USER_BY_ID_PARAMS, get_user_by_id_params()),
        (PAGINATION_QUERY, pagination_query()),
        (ERROR_RESPONSE, error_response()),
        (SUCCESS_RESPONSE, success_response()),
        (HEALTH_CHECK_RESPONSE, health_check_response()),
    ]
}

fn user_properties() -> Value {
    json!({
        "email": {
            "type": "string",
            "format": "email",
            "maxLength": 255
        },
        "firstName": {
            "type": "string",
            "minLength": 1,
            "maxLength": 100,
            "pattern": NAME_PATTERN
        },
        "lastName": {
            "type": "string",
            "minLength": 1,
            "maxLength": 100,
            "pattern": NAME_PATTERN
        }
    })
}

#[must_use]
pub fn create_user() -> Value {
    json!({
        "type": "object",
        "properties": user_properties(),
        "required": ["email", "firstName", "lastName"],
        "additionalProperties": false
    })
}

/// Partial update: every field optional, at least one present.
#[must_use]
pub fn update_user() -> Value {
    json!({
        "type": "object",
        "properties": user_properties(),
        "additionalProperties": false,
        "minProperties": 1
    })
}

#[must_use]
pub fn get_user_by_id_params() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": {
                "type": "string",
                "pattern": POSITIVE_INT_PATTERN
            }
        },
        "required": ["id"],
        "additionalProperties": false
    })
}

/// Query strings arrive as strings, so `page`/`limit` are string-typed.
#[must_use]
pub fn pagination_query() -> Value {
    json!({
        "type": "object",
        "properties": {
            "page": {
                "type": "string",
                "pattern": POSITIVE_INT_PATTERN,
                "default": "1"
            },
            "limit": {
                "type": "string",
                "pattern": POSITIVE_INT_PATTERN,
                "default": "10"
            },
            "sortBy": {
                "type": "string",
                "enum": ["id", "email", "firstName", "lastName", "createdAt"],
                "default": "id"
            },
            "sortOrder": {
                "type": "string",
                "enum": ["asc", "desc"],
                "default": "asc"
            }
        },
        "additionalProperties": false
    })
}

#[must_use]
pub fn error_response() -> Value {
    json!({
        "type": "object",
        "properties": {
            "success": { "type": "boolean", "const": false },
            "error": {
                "type": "object",
                "properties": {
                    "message": { "type": "string" },
                    "code": { "type": "string" },
                    "details": {
                        "oneOf": [
                            { "type": "array", "items": { "type": "string" } },
                            { "type": "object" }
                        ]
                    }
                },
                "required": ["message"],
                "additionalProperties": false
            }
        },
        "required": ["success", "error"],
        "additionalProperties": false
    })
}

#[must_use]
pub fn success_response() -> Value {
    json!({
        "type": "object",
        "properties": {
            "success": { "type": "boolean", "const": true },
            "data": { "type": "object" },
            "meta": {
                "type": "object",
                "properties": {
                    "pagination": {
                        "type": "object",
                        "properties": {
                            "page": { "type": "number", "minimum": 1 },
                            "limit": { "type": "number", "minimum": 1 },
                            "total": { "type": "number", "minimum": 0 },
                            "totalPages": { "type": "number", "minimum": 0 }
                        },
                        "required": ["page", "limit", "total", "totalPages"],
                        "additionalProperties": false
                    }
                },
                "additionalProperties": false
            }
        },
        "required": ["success"],
        "additionalProperties": false
    })
}

#[must_use]
pub fn health_check_response() -> Value {
    json!({
        "type": "object",
        "properties": {
            "status": { "type": "string", "enum": ["healthy", "unhealthy"] },
            "timestamp": { "type": "string", "format": "date-time" },
            "uptime": { "type": "number", "minimum": 0 },
            "services": {
                "type": "object",
                "properties": {
                    "database": {
                        "type": "object",
                        "properties": {
                            "status": {
                                "type": "string",
                                "enum": ["connected", "disconnected", "error"]
                            },
                            "responseTime": { "type": "number", "minimum": 0 }
                        },
                        "required": ["status"],
                        "additionalProperties": false
                    }
                },
                "additionalProperties": false
            }
        },
        "required": ["status", "timestamp", "uptime"],
        "additionalProperties": false
    })
}
