//! Canonical SCL text rendering.
//!
//! The serializer is the inverse of the parser for the in-memory model, not
//! for arbitrary input text: comments and incidental formatting are not
//! preserved. Output is deterministic - parameters render in map order, one
//! per line, and the document always ends with exactly one trailing newline.

use crate::error::SclError;
use crate::value::{Map, Value};

/// Renders an ordered value tree as SCL text.
pub struct Serializer {
    indent: usize,
}

impl Serializer {
    /// An indent width of 0 falls back to the canonical 4 spaces.
    pub fn new(indent: usize) -> Self {
        Serializer {
            indent: if indent == 0 { 4 } else { indent },
        }
    }

    /// Serialize a config. The top-level value must be an object.
    pub fn serialize(&self, value: &Value) -> Result<String, SclError> {
        let Value::Object(map) = value else {
            return Err(SclError::Unsupported(
                "Expected mapping at top level".to_string(),
            ));
        };
        let mut out = self.serialize_object(map, 0)?;
        out.push('\n');
        Ok(out)
    }

    fn serialize_object(&self, map: &Map, level: usize) -> Result<String, SclError> {
        let indent = self.indent(level);
        let mut lines = Vec::with_capacity(map.len());
        for (key, value) in map {
            lines.push(format!(
                "{indent}{key} :: {}",
                self.serialize_value(value, level)?
            ));
        }
        Ok(lines.join("\n"))
    }

    fn serialize_value(&self, value: &Value, level: usize) -> Result<String, SclError> {
        let rendered = match value {
            Value::Boolean(b) => format!("bool {{ {b} }}"),
            Value::Integer(n) => format!("num {{ {n} }}"),
            Value::Float(f) => format!("fl {{ {} }}", format_float(*f)),
            Value::String(s) => {
                if s.contains('\n') {
                    // Embedded newlines force the raw multiline form
                    let indent = self.indent(level);
                    format!("ml {{\n{indent}    '{s}'\n{indent}}}")
                } else {
                    format!("str {{ \"{}\" }}", escape_string(s))
                }
            }
            Value::Object(map) => {
                let body = self.serialize_object(map, level + 1)?;
                format!("class {{\n{body}\n{}}}", self.indent(level))
            }
            Value::List(items) => self.serialize_list(items)?,
        };
        Ok(rendered)
    }

    /// Infer the element kind over all elements: all-boolean, all-integer,
    /// integer-or-float (mixed widens to `fl`), then all-string. An empty
    /// list has nothing to infer from and defaults to `list(str) { }`.
    fn serialize_list(&self, items: &[Value]) -> Result<String, SclError> {
        if items.is_empty() {
            return Ok("list(str) { }".to_string());
        }

        let rendered = if items.iter().all(|v| matches!(v, Value::Boolean(_))) {
            let elems: Vec<String> = items
                .iter()
                .filter_map(Value::as_bool)
                .map(|b| b.to_string())
                .collect();
            format!("list(bool) {{ {} }}", elems.join(", "))
        } else if items.iter().all(|v| matches!(v, Value::Integer(_))) {
            let elems: Vec<String> = items
                .iter()
                .filter_map(Value::as_int)
                .map(|n| n.to_string())
                .collect();
            format!("list(num) {{ {} }}", elems.join(", "))
        } else if items
            .iter()
            .all(|v| matches!(v, Value::Integer(_) | Value::Float(_)))
        {
            // Integers keep their own rendering; they reparse widened
            let elems: Vec<String> = items
                .iter()
                .map(|v| match v {
                    Value::Integer(n) => n.to_string(),
                    Value::Float(f) => format_float(*f),
                    _ => unreachable!(),
                })
                .collect();
            format!("list(fl) {{ {} }}", elems.join(", "))
        } else if items.iter().all(|v| matches!(v, Value::String(_))) {
            let elems: Vec<String> = items
                .iter()
                .filter_map(Value::as_str)
                .map(|s| format!("\"{}\"", escape_string(s)))
                .collect();
            format!("list(str) {{ {} }}", elems.join(", "))
        } else {
            return Err(SclError::Unsupported(
                "Unsupported list element type".to_string(),
            ));
        };
        Ok(rendered)
    }

    fn indent(&self, level: usize) -> String {
        " ".repeat(self.indent * level)
    }
}

fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Shortest decimal form that still carries a fractional part for whole
/// floats, so `1.0` renders as `1.0` rather than `1`.
fn format_float(f: f64) -> String {
    format!("{f:?}")
}

#[test]
fn test_float_rendering_keeps_fraction() {
    assert_eq!(format_float(1.0), "1.0");
    assert_eq!(format_float(2.5), "2.5");
    assert_eq!(format_float(-0.125), "-0.125");
}
