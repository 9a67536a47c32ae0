use thiserror::Error;

/// Errors produced while lexing, parsing, or serializing SCL.
///
/// Every lexical and grammatical violation surfaces as [`SclError::Syntax`]
/// with the 1-based line and column of the offending token (or of the lexer
/// cursor at the point of failure). The first error aborts the whole parse;
/// there is no recovery mode.
#[derive(Debug, Error)]
pub enum SclError {
    /// Lexical or grammatical violation at a known source position.
    #[error("Syntax error at line {line}, column {column}: {message}")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },

    /// Class nesting exceeded the parser's configured bound.
    ///
    /// Reported instead of letting adversarial input exhaust the call stack.
    #[error("Syntax error at line {line}, column {column}: maximum nesting depth of {limit} exceeded")]
    MaxDepth {
        limit: usize,
        line: usize,
        column: usize,
    },

    /// Serialization violation: non-mapping root or a value the SCL text
    /// format cannot express (e.g. a heterogeneous list).
    #[error("Parse error: {0}")]
    Unsupported(String),

    /// I/O failure from the file-based `load`/`dump` wrappers.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SclError {
    pub fn syntax(message: impl Into<String>, line: usize, column: usize) -> Self {
        SclError::Syntax {
            message: message.into(),
            line,
            column,
        }
    }

    /// Source position of the error, when one is known.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            SclError::Syntax { line, column, .. } | SclError::MaxDepth { line, column, .. } => {
                Some((*line, *column))
            }
            _ => None,
        }
    }
}
