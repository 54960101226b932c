//! Helpers for reading fields out of loosely-typed rule configurations.
//!
//! Rule configs arrive as arbitrary `serde_json::Value` trees. These helpers
//! centralize the coercion rules shared by the validator and the normalizer:
//! numbers must be finite, required strings fall back to a caller-supplied
//! default, and optional values are surfaced only when well-typed.

use serde_json::{Map, Value};

/// True when the value is a finite JSON number.
///
/// `serde_json` never parses NaN or infinities, but values assembled
/// programmatically can carry them, so the check stays explicit.
pub(crate) fn is_finite_number(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64().is_some_and(f64::is_finite),
        _ => false,
    }
}

/// Coerce a finite number to `i32`, truncating fractional values.
pub(crate) fn as_i32(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).ok()
            } else {
                n.as_f64().filter(|f| f.is_finite()).map(|f| f as i32)
            }
        }
        _ => None,
    }
}

/// Read an optional `i32` field; absent or mistyped values yield `None`.
pub(crate) fn opt_i32(obj: &Map<String, Value>, key: &str) -> Option<i32> {
    obj.get(key).and_then(as_i32)
}

/// Read an `i32` field with a fallback for absent or mistyped values.
pub(crate) fn i32_or(obj: &Map<String, Value>, key: &str, fallback: i32) -> i32 {
    opt_i32(obj, key).unwrap_or(fallback)
}

/// Read a string field, falling back when absent or mistyped.
pub(crate) fn str_or(obj: &Map<String, Value>, key: &str, fallback: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => fallback.to_string(),
    }
}

/// Read a bool field, falling back when absent or mistyped.
pub(crate) fn bool_or(obj: &Map<String, Value>, key: &str, fallback: bool) -> bool {
    match obj.get(key) {
        Some(Value::Bool(b)) => *b,
        _ => fallback,
    }
}

/// Non-empty string view of a value, or `None`.
pub(crate) fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

/// Collect a value into a list of strings.
///
/// Arrays keep only their string elements; a single non-empty string becomes
/// a one-element list; everything else is empty.
pub(crate) fn string_array(value: &Value) -> Vec<String> {
    match value {
        Value::Array(entries) => entries
            .iter()
            .filter_map(|entry| entry.as_str().map(str::to_string))
            .collect(),
        Value::String(s) if !s.is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}

/// Object view of an optional field, treating absent and mistyped alike.
pub(crate) fn object_field<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
) -> Option<&'a Map<String, Value>> {
    obj.get(key).and_then(Value::as_object)
}
