//! JSON output for SCL values.
//!
//! Conversions are one-directional and total: every SCL value has a JSON
//! rendering. Integers and floats map to the corresponding JSON number
//! forms; non-finite floats have no JSON representation and map to `null`.
//! Object key order is preserved.

use crate::value::Value;

/// Convert an SCL value tree to a `serde_json::Value`.
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Integer(n) => serde_json::Value::Number((*n).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::List(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Object(map) => {
            let entries = map
                .iter()
                .map(|(k, v)| (k.clone(), to_json(v)))
                .collect::<serde_json::Map<String, serde_json::Value>>();
            serde_json::Value::Object(entries)
        }
    }
}

/// Compact JSON rendering of an SCL value.
pub fn to_json_string(value: &Value) -> String {
    to_json(value).to_string()
}

/// Pretty-printed JSON rendering of an SCL value.
pub fn to_json_string_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(&to_json(value)).unwrap_or_else(|_| to_json_string(value))
}
