use std::fmt::{Display, Formatter};

use monkey_types::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // Special
    Illegal,
    EOF,

    // Identifiers & literals
    Ident,
    Int,

    // Operators
    Assign,   // =
    Plus,     // +
    Minus,    // -
    Bang,     // !
    Asterisk, // *
    Slash,    // /
    Lt,       // <
    Gt,       // >
    Eq,       // ==
    NotEq,    // !=

    // Delimiters
    Comma,     // ,
    Semicolon, // ;
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// Upper-case name used in diagnostics and REPL output.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EOF => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Bang => "BANG",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Eq => "EQ",
            TokenKind::NotEq => "NOT_EQ",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        }
    }

    pub fn is_keyword(&self) -> bool {
        KEYWORDS.iter().any(|(_, kind)| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Reserved words of the language.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
];

/// Resolves an identifier-shaped literal to its keyword kind, or [TokenKind::Ident].
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == ident)
        .map(|(_, kind)| *kind)
        .unwrap_or(TokenKind::Ident)
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Self { kind, literal: literal.into(), span }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{Type:{} Literal:{}}}", self.kind, self.literal)
    }
}
