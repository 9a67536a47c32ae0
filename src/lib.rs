//! # SCL
//!
//! A small statically-typed configuration language: text in, an ordered
//! key-value structure out, and back. Every value declares its kind inline
//! with a typed block:
//!
//! ```text
//! [connection settings]
//! host :: str { "db.internal" }
//! port :: num { 5432 }
//! tls :: bool { yes }
//! pool :: class {
//!     min :: num { 2 }
//!     timeouts :: list(fl) { 0.5, 1, 2.5 }
//! }
//! ```
//!
//! ```
//! let config = scl_lang::loads("port :: num { 5432 }\n").unwrap();
//! assert_eq!(config["port"], scl_lang::Value::Integer(5432));
//!
//! let text = scl_lang::dumps(&scl_lang::Value::Object(config), 4).unwrap();
//! assert_eq!(text, "port :: num { 5432 }\n");
//! ```
//!
//! Parsing preserves key order; duplicate keys take the latest value while
//! keeping their first position. Serialization is canonical: the same value
//! tree always renders the same text, ending in exactly one newline.

pub mod ast;
pub mod error;
pub mod json;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod value;

use std::fs;
use std::path::Path;

pub use ast::{Keyword, Token, TokenKind};
pub use error::SclError;
pub use json::{to_json, to_json_string, to_json_string_pretty};
pub use lexer::Lexer;
pub use output::Serializer;
pub use parser::{DEFAULT_MAX_DEPTH, Parser};
pub use value::{Map, Value};

/// Parse SCL text into an ordered mapping.
pub fn loads(text: &str) -> Result<Map, SclError> {
    let tokens = Lexer::tokenize(text)?;
    Parser::new(tokens).parse()
}

/// Like [`loads`], with an explicit bound on `class` nesting.
pub fn loads_with_max_depth(text: &str, max_depth: usize) -> Result<Map, SclError> {
    let tokens = Lexer::tokenize(text)?;
    Parser::new(tokens).with_max_depth(max_depth).parse()
}

/// Render a config as SCL text. The value must be an object.
pub fn dumps(value: &Value, indent: usize) -> Result<String, SclError> {
    Serializer::new(indent).serialize(value)
}

/// Read and parse an SCL file. A leading UTF-8 byte-order mark is stripped.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Map, SclError> {
    let text = fs::read_to_string(path)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    loads(text)
}

/// Render a config and write it to a file.
pub fn dump<P: AsRef<Path>>(value: &Value, path: P, indent: usize) -> Result<(), SclError> {
    let text = dumps(value, indent)?;
    fs::write(path, text)?;
    Ok(())
}
