//! In-place payload normalization applied before schema evaluation.
//!
//! Two adjustments, both driven by the schema document:
//! - properties undeclared by an object schema with `additionalProperties: false`
//!   are removed (stripped, not rejected)
//! - absent properties whose schema carries a `default` receive a clone of it
//!
//! Recursion follows `properties` and `items`. Combinators (`oneOf`, `anyOf`,
//! `allOf`) are not traversed; a branch cannot strip or default anything.

use serde_json::{Map, Value};

/// Normalize `data` against `schema` in place.
///
/// Normalizing an already-normalized value leaves it unchanged.
pub fn normalize(schema: &Value, data: &mut Value) {
    let Some(schema) = schema.as_object() else {
        return;
    };

    match data {
        Value::Object(map) => normalize_object(schema, map),
        Value::Array(items) => {
            if let Some(item_schema) = schema.get("items") {
                for item in items {
                    normalize(item_schema, item);
                }
            }
        }
        _ => {}
    }
}

fn normalize_object(schema: &Map<String, Value>, map: &mut Map<String, Value>) {
    let properties = schema.get("properties").and_then(Value::as_object);

    if schema.get("additionalProperties") == Some(&Value::Bool(false)) {
        map.retain(|key, _| properties.is_some_and(|declared| declared.contains_key(key)));
    }

    let Some(properties) = properties else {
        return;
    };

    for (key, property_schema) in properties {
        if let Some(value) = map.get_mut(key) {
            normalize(property_schema, value);
        } else if let Some(default) = property_schema.get("default") {
            map.insert(key.clone(), default.clone());
        }
    }
}
