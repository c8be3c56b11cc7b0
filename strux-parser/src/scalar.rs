//! Scalar coercion for the structured-text notation

use crate::document::{Number, Value};

/// Coerce raw scalar text into a typed value.
///
/// Rules apply top to bottom and the first match wins:
///
/// 1. `true` / `false` become booleans
/// 2. `null` becomes null
/// 3. text that parses fully as an integer or finite float becomes a number
/// 4. anything else stays a (trimmed) string
///
/// Matching is exact and case-sensitive: `TRUE` or `Null` stay strings, as
/// do `inf` and `nan` (the number rule only accepts finite values).
pub fn coerce_scalar(raw: &str) -> Value {
    let text = raw.trim();
    match text {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        "null" => return Value::Null,
        _ => {}
    }
    if let Ok(n) = text.parse::<i64>() {
        return Value::Number(Number::from(n));
    }
    if let Ok(n) = text.parse::<u64>() {
        return Value::Number(Number::from(n));
    }
    if let Ok(f) = text.parse::<f64>() {
        if f.is_finite() {
            if let Some(n) = Number::from_f64(f) {
                return Value::Number(n);
            }
        }
    }
    Value::String(text.to_string())
}

/// Render a scalar or empty container on a single line.
///
/// Strings are emitted as-is with no quoting or escaping; callers own the
/// resulting round-trip caveats (see the crate docs).
pub fn render_inline(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(_) => "[]".to_string(),
        Value::Mapping(_) => "{}".to_string(),
    }
}
