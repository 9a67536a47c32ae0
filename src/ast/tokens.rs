/// The eight SCL type keywords.
///
/// A keyword token keeps its spelling (via [`Keyword::as_str`]) because the
/// grammar lets the same word appear in two positions: as a type tag
/// (`timeout :: num { 30 }`) and as an ordinary parameter name
/// (`num :: str { "the word num" }`). The parser decides contextually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Bool,
    Str,
    Num,
    Fl,
    Ml,
    Class,
    List,
    Dynamic,
}

impl Keyword {
    /// Look up a scanned identifier; `None` if it is not a type keyword.
    pub fn from_ident(ident: &str) -> Option<Keyword> {
        match ident {
            "bool" => Some(Keyword::Bool),
            "str" => Some(Keyword::Str),
            "num" => Some(Keyword::Num),
            "fl" => Some(Keyword::Fl),
            "ml" => Some(Keyword::Ml),
            "class" => Some(Keyword::Class),
            "list" => Some(Keyword::List),
            "dynamic" => Some(Keyword::Dynamic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Bool => "bool",
            Keyword::Str => "str",
            Keyword::Num => "num",
            Keyword::Fl => "fl",
            Keyword::Ml => "ml",
            Keyword::Class => "class",
            Keyword::List => "list",
            Keyword::Dynamic => "dynamic",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Parameter name: letters, digits, `_`, `-` (may start with digits).
    Identifier(String),

    /// One of the eight type keywords, spelling retained.
    Keyword(Keyword),

    /// `true`/`yes` or `false`/`no`.
    Boolean(bool),

    /// Double-quoted string, escapes already resolved.
    Str(String),

    /// Single-quoted raw string, newlines preserved verbatim.
    MultilineStr(String),

    /// Integer literal.
    Number(i64),

    /// Literal with exactly one `.`.
    Float(f64),

    /// `[ ... ]` content, surrounding whitespace stripped.
    ///
    /// Carried through the token stream for tooling; the parser discards it.
    Comment(String),

    /// `::`
    DoubleColon,

    LBrace,
    RBrace,
    LParen,
    RParen,
    Comma,

    /// Significant for line counting only; the parser discards it.
    Newline,

    /// Synthetic end-of-input marker, always the last token.
    Eof,
}

impl TokenKind {
    /// Short noun used in diagnostics, e.g. `Expected number, got identifier`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier(_) => "identifier",
            TokenKind::Keyword(kw) => kw.as_str(),
            TokenKind::Boolean(_) => "boolean",
            TokenKind::Str(_) => "string",
            TokenKind::MultilineStr(_) => "multiline string",
            TokenKind::Number(_) => "number",
            TokenKind::Float(_) => "float",
            TokenKind::Comment(_) => "comment",
            TokenKind::DoubleColon => "'::'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::Newline => "newline",
            TokenKind::Eof => "end of input",
        }
    }
}

/// A lexed token with the 1-based position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, column: usize) -> Self {
        Token { kind, line, column }
    }
}
