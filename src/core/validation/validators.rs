//! Reusable field validators
//!
//! These operate on raw JSON values so that a body can be checked before it
//! is turned into a typed payload.

use crate::core::error::ValidationError;
use serde_json::Value;

/// Returns true for values a client would consider "not provided"
///
/// `null`, `false`, `0`, `""`, `[]` and `{}` are all falsy.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Validator: field is required and must be a non-empty string
///
/// Any falsy or non-string value counts as missing.
pub fn required_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Validator: field may be absent, but when supplied it must be a non-empty string
///
/// `null` is treated as absent.
pub fn optional_text(
    field: &'static str,
    value: Option<&Value>,
) -> Result<Option<String>, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if !s.is_empty() => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::InvalidField { field }),
    }
}
