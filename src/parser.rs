//! Recursive-descent parser for the SCL typed-block grammar.
//!
//! ```text
//! config      := parameter* EOF
//! parameter   := name "::" typed_value
//! name        := IDENTIFIER | type-keyword | NUMBER | STRING
//! typed_value := "bool"  "{" BOOLEAN "}"
//!              | "str"   "{" STRING "}"
//!              | "num"   "{" NUMBER "}"
//!              | "fl"    "{" (FLOAT | NUMBER) "}"
//!              | "ml"    "{" MULTILINE_STRING "}"
//!              | "class" "{" parameter* "}"
//!              | "list" "(" elem_kind ")" "{" (value ("," value)*)? "}"
//!              | "dynamic" "{" literal "}"
//! elem_kind   := "num" | "fl" | "bool" | "str"
//! ```
//!
//! Newline and comment tokens carry no grammatical meaning and are dropped
//! before parsing begins.

use std::mem;

use crate::ast::{Keyword, Token, TokenKind};
use crate::error::SclError;
use crate::value::{Map, Value};

/// Default bound on `class` nesting.
///
/// Deep enough for any realistic document while keeping recursion well
/// inside default thread stacks; exceeding it reports [`SclError::MaxDepth`]
/// instead of overflowing.
pub const DEFAULT_MAX_DEPTH: usize = 128;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    max_depth: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|t| !matches!(t.kind, TokenKind::Newline | TokenKind::Comment(_)))
            .collect();
        if !matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Eof)) {
            let (line, column) = tokens.last().map(|t| (t.line, t.column)).unwrap_or((1, 1));
            tokens.push(Token::new(TokenKind::Eof, line, column));
        }
        Parser {
            tokens,
            pos: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            depth: 0,
        }
    }

    /// Override the `class` nesting bound.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse a complete config. Consumes the parser.
    ///
    /// Duplicate keys are applied by overwrite-merge: the later value wins
    /// but the key keeps the position of its first occurrence.
    pub fn parse(mut self) -> Result<Map, SclError> {
        let mut config = Map::new();
        while self.current().kind != TokenKind::Eof {
            let (name, value) = self.parse_parameter()?;
            config.insert(name, value);
        }
        self.expect(&TokenKind::Eof)?;
        Ok(config)
    }

    fn current(&self) -> &Token {
        // The trailing Eof token is never consumed by grammar rules, so the
        // clamp only matters after expect(Eof)
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn expect(&mut self, expected: &TokenKind) -> Result<Token, SclError> {
        let current = self.current();
        if mem::discriminant(&current.kind) != mem::discriminant(expected) {
            return Err(SclError::syntax(
                format!("Expected {}, got {}", expected.name(), current.kind.name()),
                current.line,
                current.column,
            ));
        }
        let token = current.clone();
        self.advance();
        Ok(token)
    }

    fn error_expected(&self, what: &str) -> SclError {
        let token = self.current();
        SclError::syntax(
            format!("Expected {}, got {}", what, token.kind.name()),
            token.line,
            token.column,
        )
    }

    fn parse_parameter(&mut self) -> Result<(String, Value), SclError> {
        let name = self.parse_name()?;
        self.expect(&TokenKind::DoubleColon)?;
        let value = self.parse_typed_value()?;
        Ok((name, value))
    }

    /// Parameter names may be identifiers, any type keyword, a number
    /// (stringified), or a quoted string.
    fn parse_name(&mut self) -> Result<String, SclError> {
        let name = match &self.current().kind {
            TokenKind::Identifier(s) => s.clone(),
            TokenKind::Keyword(kw) => kw.as_str().to_string(),
            TokenKind::Number(n) => n.to_string(),
            TokenKind::Str(s) => s.clone(),
            _ => return Err(self.error_expected("identifier or keyword")),
        };
        self.advance();
        Ok(name)
    }

    fn parse_typed_value(&mut self) -> Result<Value, SclError> {
        let token = self.current().clone();
        let keyword = match &token.kind {
            TokenKind::Keyword(kw) => *kw,
            other => {
                let spelling = match other {
                    TokenKind::Identifier(s) => s.clone(),
                    other => other.name().to_string(),
                };
                return Err(SclError::syntax(
                    format!("Unknown type: {spelling}"),
                    token.line,
                    token.column,
                ));
            }
        };
        self.advance();

        match keyword {
            Keyword::Bool => self.parse_bool_value(),
            Keyword::Str => self.parse_str_value(),
            Keyword::Num => self.parse_num_value(),
            Keyword::Fl => self.parse_fl_value(),
            Keyword::Ml => self.parse_ml_value(),
            Keyword::Class => self.parse_class_value(),
            Keyword::List => self.parse_list_value(),
            Keyword::Dynamic => self.parse_dynamic_value(),
        }
    }

    fn parse_bool_value(&mut self) -> Result<Value, SclError> {
        self.expect(&TokenKind::LBrace)?;
        let value = self.expect_boolean()?;
        self.expect(&TokenKind::RBrace)?;
        Ok(Value::Boolean(value))
    }

    fn parse_str_value(&mut self) -> Result<Value, SclError> {
        self.expect(&TokenKind::LBrace)?;
        let value = self.expect_string()?;
        self.expect(&TokenKind::RBrace)?;
        Ok(Value::String(value))
    }

    fn parse_num_value(&mut self) -> Result<Value, SclError> {
        self.expect(&TokenKind::LBrace)?;
        let value = self.expect_number()?;
        self.expect(&TokenKind::RBrace)?;
        Ok(Value::Integer(value))
    }

    fn parse_fl_value(&mut self) -> Result<Value, SclError> {
        self.expect(&TokenKind::LBrace)?;
        let value = self.expect_float_or_number()?;
        self.expect(&TokenKind::RBrace)?;
        Ok(Value::Float(value))
    }

    fn parse_ml_value(&mut self) -> Result<Value, SclError> {
        self.expect(&TokenKind::LBrace)?;
        let value = self.expect_multiline_string()?;
        self.expect(&TokenKind::RBrace)?;
        Ok(Value::String(value))
    }

    fn parse_class_value(&mut self) -> Result<Value, SclError> {
        if self.depth >= self.max_depth {
            let token = self.current();
            return Err(SclError::MaxDepth {
                limit: self.max_depth,
                line: token.line,
                column: token.column,
            });
        }
        self.depth += 1;

        self.expect(&TokenKind::LBrace)?;
        let mut object = Map::new();
        while self.current().kind != TokenKind::RBrace {
            if self.current().kind == TokenKind::Eof {
                return Err(self.error_expected("'}'"));
            }
            let (name, value) = self.parse_parameter()?;
            object.insert(name, value);
        }
        self.expect(&TokenKind::RBrace)?;

        self.depth -= 1;
        Ok(Value::Object(object))
    }

    fn parse_list_value(&mut self) -> Result<Value, SclError> {
        self.expect(&TokenKind::LParen)?;
        let elem_token = self.current().clone();
        let elem_kind = match elem_token.kind {
            TokenKind::Keyword(kw @ (Keyword::Num | Keyword::Fl | Keyword::Bool | Keyword::Str)) => {
                self.advance();
                kw
            }
            other => {
                let spelling = match &other {
                    TokenKind::Keyword(kw) => kw.as_str().to_string(),
                    TokenKind::Identifier(s) => s.clone(),
                    other => other.name().to_string(),
                };
                return Err(SclError::syntax(
                    format!("Unsupported list element type: {spelling}"),
                    elem_token.line,
                    elem_token.column,
                ));
            }
        };
        self.expect(&TokenKind::RParen)?;
        self.expect(&TokenKind::LBrace)?;

        let mut items = Vec::new();
        if self.current().kind != TokenKind::RBrace {
            loop {
                items.push(self.parse_list_element(elem_kind)?);
                match self.current().kind {
                    // No trailing comma: after a comma, another element must follow
                    TokenKind::Comma => self.advance(),
                    TokenKind::RBrace => break,
                    _ => return Err(self.error_expected("comma or closing brace")),
                }
            }
        }
        self.expect(&TokenKind::RBrace)?;
        Ok(Value::List(items))
    }

    fn parse_list_element(&mut self, elem_kind: Keyword) -> Result<Value, SclError> {
        match elem_kind {
            Keyword::Num => Ok(Value::Integer(self.expect_number()?)),
            Keyword::Fl => Ok(Value::Float(self.expect_float_or_number()?)),
            Keyword::Bool => Ok(Value::Boolean(self.expect_boolean()?)),
            Keyword::Str => Ok(Value::String(self.expect_string()?)),
            _ => unreachable!("element kind restricted by parse_list_value"),
        }
    }

    fn parse_dynamic_value(&mut self) -> Result<Value, SclError> {
        self.expect(&TokenKind::LBrace)?;
        let token = self.current().clone();
        let value = match token.kind {
            TokenKind::Number(n) => Value::Integer(n),
            TokenKind::Float(f) => Value::Float(f),
            TokenKind::Boolean(b) => Value::Boolean(b),
            TokenKind::Str(s) => Value::String(s),
            TokenKind::MultilineStr(s) => Value::String(s),
            _ => {
                return Err(SclError::syntax(
                    "dynamic supports only base types (bool, str, num, fl, ml)",
                    token.line,
                    token.column,
                ));
            }
        };
        self.advance();
        self.expect(&TokenKind::RBrace)?;
        Ok(value)
    }

    fn expect_boolean(&mut self) -> Result<bool, SclError> {
        if let TokenKind::Boolean(b) = self.current().kind {
            self.advance();
            Ok(b)
        } else {
            Err(self.error_expected("boolean"))
        }
    }

    fn expect_number(&mut self) -> Result<i64, SclError> {
        if let TokenKind::Number(n) = self.current().kind {
            self.advance();
            Ok(n)
        } else {
            Err(self.error_expected("number"))
        }
    }

    /// `fl` positions accept integer literals, widened to float.
    fn expect_float_or_number(&mut self) -> Result<f64, SclError> {
        match self.current().kind {
            TokenKind::Float(f) => {
                self.advance();
                Ok(f)
            }
            TokenKind::Number(n) => {
                self.advance();
                Ok(n as f64)
            }
            _ => Err(self.error_expected("float or number")),
        }
    }

    fn expect_string(&mut self) -> Result<String, SclError> {
        if let TokenKind::Str(s) = &self.current().kind {
            let s = s.clone();
            self.advance();
            Ok(s)
        } else {
            Err(self.error_expected("string"))
        }
    }

    fn expect_multiline_string(&mut self) -> Result<String, SclError> {
        if let TokenKind::MultilineStr(s) = &self.current().kind {
            let s = s.clone();
            self.advance();
            Ok(s)
        } else {
            Err(self.error_expected("multiline string"))
        }
    }
}
