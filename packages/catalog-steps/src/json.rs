//! Type-checked accessors over untyped JSON trees.
//!
//! The API's schema is never modelled here. Callers descend one level at a
//! time and every accessor turns a shape mismatch into a `StepError`.

use serde_json::{Map, Value};

use crate::error::{Result, StepError};

/// Short name of a JSON value's type, used in failure messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// First `max_chars` characters of `text`.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Borrow `value` as an object.
pub fn ensure_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| StepError::NotAnObject {
        what: what.to_string(),
        actual: type_name(value),
    })
}

/// Borrow the list stored under `key` in `object`.
pub fn ensure_list<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a Vec<Value>> {
    let value = object
        .get(key)
        .ok_or_else(|| StepError::MissingKey(key.to_string()))?;
    value.as_array().ok_or_else(|| StepError::NotAList {
        key: key.to_string(),
        actual: type_name(value),
    })
}

/// First element of `list`, or an `EmptyList` error naming `what`.
pub fn first_or_fail<'a>(list: &'a [Value], what: &str) -> Result<&'a Value> {
    list.first()
        .ok_or_else(|| StepError::EmptyList(what.to_string()))
}

/// Whether `value` is an object carrying `key`.
pub fn has_key(value: &Value, key: &str) -> bool {
    value.as_object().is_some_and(|object| object.contains_key(key))
}

/// Children listed under `key`, or nothing when absent or not a list.
pub fn children<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Text form of a scalar: strings as-is, everything else as compact JSON.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
