use crate::ast::{Keyword, Token, TokenKind};
use crate::error::SclError;

/// Single-pass SCL scanner.
///
/// Walks the input left to right with one character of lookahead and no
/// backtracking, producing position-stamped tokens. Spaces and tabs are
/// skipped; newlines are emitted as tokens so the parser can discard them
/// while line counting stays accurate.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the whole input, including the final `Eof` token.
    pub fn tokenize(input: &str) -> Result<Vec<Token>, SclError> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += 1;
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t') = self.current_char() {
            self.advance();
        }
    }

    fn error(&self, message: impl Into<String>) -> SclError {
        SclError::syntax(message, self.line, self.column)
    }

    pub fn next_token(&mut self) -> Result<Token, SclError> {
        self.skip_whitespace();

        let (line, column) = (self.line, self.column);
        let token = |kind| Ok(Token::new(kind, line, column));

        match self.current_char() {
            None => token(TokenKind::Eof),
            Some('\n') => {
                self.advance();
                token(TokenKind::Newline)
            }
            Some('[') => self.read_comment(line, column),
            Some(':') => {
                if self.peek_char(1) == Some(':') {
                    self.advance();
                    self.advance();
                    token(TokenKind::DoubleColon)
                } else {
                    Err(self.error("Unexpected ':'"))
                }
            }
            Some('{') => {
                self.advance();
                token(TokenKind::LBrace)
            }
            Some('}') => {
                self.advance();
                token(TokenKind::RBrace)
            }
            Some('(') => {
                self.advance();
                token(TokenKind::LParen)
            }
            Some(')') => {
                self.advance();
                token(TokenKind::RParen)
            }
            Some(',') => {
                self.advance();
                token(TokenKind::Comma)
            }
            Some('"') => self.read_string(line, column),
            Some('\'') => self.read_multiline_string(line, column),
            Some('-') => {
                if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) {
                    self.read_number(line, column)
                } else {
                    Err(self.error("Expected digit after '-'"))
                }
            }
            Some(ch) if ch.is_ascii_digit() => self.read_number_or_identifier(line, column),
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => {
                Ok(self.read_identifier(line, column))
            }
            Some(ch) => Err(self.error(format!("Unexpected character: {ch}"))),
        }
    }

    fn read_comment(&mut self, line: usize, column: usize) -> Result<Token, SclError> {
        self.advance(); // consume '['
        let mut content = String::new();
        while let Some(ch) = self.current_char() {
            if ch == ']' {
                self.advance();
                let content = content.trim().to_string();
                return Ok(Token::new(TokenKind::Comment(content), line, column));
            }
            content.push(ch);
            self.advance();
        }
        Err(self.error("Unclosed comment"))
    }

    fn read_string(&mut self, line: usize, column: usize) -> Result<Token, SclError> {
        self.advance(); // consume opening quote
        let mut content = String::new();
        while let Some(ch) = self.current_char() {
            match ch {
                '"' => {
                    self.advance();
                    return Ok(Token::new(TokenKind::Str(content), line, column));
                }
                '\\' => {
                    self.advance();
                    match self.current_char() {
                        Some('n') => content.push('\n'),
                        Some('t') => content.push('\t'),
                        // Unknown escapes keep the character, dropping the backslash
                        Some(other) => content.push(other),
                        None => break,
                    }
                    self.advance();
                }
                _ => {
                    content.push(ch);
                    self.advance();
                }
            }
        }
        Err(self.error("Unclosed string"))
    }

    fn read_multiline_string(&mut self, line: usize, column: usize) -> Result<Token, SclError> {
        self.advance(); // consume opening quote
        let mut content = String::new();
        while let Some(ch) = self.current_char() {
            if ch == '\'' {
                self.advance();
                return Ok(Token::new(TokenKind::MultilineStr(content), line, column));
            }
            content.push(ch);
            self.advance();
        }
        Err(self.error("Unclosed multiline string"))
    }

    fn read_number(&mut self, line: usize, column: usize) -> Result<Token, SclError> {
        let mut literal = String::new();
        if self.current_char() == Some('-') {
            literal.push('-');
            self.advance();
        }

        let mut has_dot = false;
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                literal.push(ch);
                self.advance();
            } else if ch == '.' && !has_dot {
                // A second '.' ends the literal and is left in the input
                has_dot = true;
                literal.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = if has_dot {
            let f = literal.parse::<f64>().map_err(|_| {
                SclError::syntax(format!("Invalid float literal: {literal}"), line, column)
            })?;
            TokenKind::Float(f)
        } else {
            let n = literal.parse::<i64>().map_err(|_| {
                SclError::syntax(format!("Number out of range: {literal}"), line, column)
            })?;
            TokenKind::Number(n)
        };
        Ok(Token::new(kind, line, column))
    }

    /// A digit run immediately followed by a letter or underscore is a name,
    /// not a number - SCL allows identifiers like `123abc`.
    fn read_number_or_identifier(&mut self, line: usize, column: usize) -> Result<Token, SclError> {
        let mut ahead = self.position;
        while self.input.get(ahead).is_some_and(|c| c.is_ascii_digit()) {
            ahead += 1;
        }
        if self
            .input
            .get(ahead)
            .is_some_and(|c| c.is_ascii_alphabetic() || *c == '_')
        {
            Ok(self.read_identifier(line, column))
        } else {
            self.read_number(line, column)
        }
    }

    fn read_identifier(&mut self, line: usize, column: usize) -> Token {
        let mut ident = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = if let Some(keyword) = Keyword::from_ident(&ident) {
            TokenKind::Keyword(keyword)
        } else {
            match ident.as_str() {
                "true" | "yes" => TokenKind::Boolean(true),
                "false" | "no" => TokenKind::Boolean(false),
                _ => TokenKind::Identifier(ident),
            }
        };
        Token::new(kind, line, column)
    }
}

#[test]
fn test_keywords_and_aliases() {
    let mut lexer = Lexer::new("bool class yes no value");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Keyword(Keyword::Bool));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Keyword(Keyword::Class));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Boolean(true));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Boolean(false));
    assert_eq!(
        lexer.next_token().unwrap().kind,
        TokenKind::Identifier("value".to_string())
    );
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
}

#[test]
fn test_parameter_line() {
    let mut lexer = Lexer::new("port :: num { 8080 }");
    assert_eq!(
        lexer.next_token().unwrap().kind,
        TokenKind::Identifier("port".to_string())
    );
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::DoubleColon);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Keyword(Keyword::Num));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::LBrace);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Number(8080));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::RBrace);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
}
