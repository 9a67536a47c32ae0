//! # SCL - Lexical Structure
//!
//! Token definitions for the SCL configuration language. A token records its
//! kind (with any literal payload) and the 1-based line/column of its first
//! character, so every downstream diagnostic can point at the source.
//!
//! ## Token Categories
//!
//! - **Literals** - booleans (`true`/`yes`, `false`/`no`), integers, floats,
//!   quoted strings, raw multiline strings
//! - **Keywords** - the eight type tags `bool`, `str`, `num`, `fl`, `ml`,
//!   `class`, `list`, `dynamic` (also usable as parameter names)
//! - **Punctuation** - `::`, `{`, `}`, `(`, `)`, `,`
//! - **Layout** - newlines and `[comments]`, emitted by the lexer but
//!   discarded by the parser
//!
//! ## Example
//!
//! ```text
//! [server settings]
//! port :: num { 8080 }
//! hosts :: list(str) { "a", "b" }
//! ```

pub mod tokens;

pub use tokens::{Keyword, Token, TokenKind};
