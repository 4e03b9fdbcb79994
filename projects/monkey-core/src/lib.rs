use monkey_ast::Program;
use monkey_parser::{Lexer, Parser, Token, TokenKind};
use monkey_types::{MonkeyError, Result};

pub mod config;

pub use config::{MonkeyConfig, ReplConfig, ReplMode, CONFIG_FILE};

/// A parsed program together with the diagnostics collected while parsing it.
///
/// Both can be non-empty at the same time: statements that parsed cleanly are
/// kept even when others were abandoned.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<String>,
}

impl ParseOutput {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<Program> {
        if self.errors.is_empty() { Ok(self.program) } else { Err(MonkeyError::parse(self.errors)) }
    }
}

#[derive(Debug, Default)]
pub struct Frontend;

impl Frontend {
    pub fn new() -> Self {
        Self
    }

    /// All tokens of `source`, terminated by a single EOF token.
    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();

        loop {
            let token = lexer.next_token();
            let done = token.kind == TokenKind::EOF;
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }

    pub fn parse(&self, source: &str) -> ParseOutput {
        let mut parser = Parser::new(Lexer::new(source));
        let program = parser.parse_program();
        ParseOutput { program, errors: parser.into_errors() }
    }

    /// Like [Frontend::parse], but any diagnostic turns into an error.
    pub fn check(&self, source: &str) -> Result<Program> {
        self.parse(source).into_result()
    }
}
