use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
use monkey_ast::*;
use monkey_types::Span;

/// Statement-level recursive-descent parser.
///
/// Owns its [Lexer] and keeps exactly one token of lookahead in `peek`.
/// Grammar mismatches never abort the parse; they are collected in
/// [Parser::errors] and the offending statement is dropped.
pub struct Parser {
    lexer: Lexer,
    curr: Token,
    peek: Token,
    errors: Vec<String>,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Self { lexer, curr: dummy_token(), peek: dummy_token(), errors: Vec::new() };

        // Read two tokens so `curr` and `peek` are both set
        parser.advance();
        parser.advance();
        parser
    }

    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::new(source))
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    pub fn is_eof(&self) -> bool {
        self.curr.kind == TokenKind::EOF
    }

    fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.curr = std::mem::replace(&mut self.peek, next);
    }

    pub fn curr_token_is(&self, kind: TokenKind) -> bool {
        self.curr.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.advance();
            true
        }
        else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let message = format!("expected next token to be {}, got {} instead", expected, self.peek.kind);
        self.errors.push(message);
    }

    /// Parses until EOF. Every loop step advances at least one token, even
    /// after a statement was abandoned.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.is_eof() {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.advance();
        }

        program
    }

    /// Only `let` and `return` start a statement for now; any other token
    /// yields `None` without a diagnostic.
    pub fn parse_statement(&mut self) -> Option<Statement> {
        match self.curr.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            _ => None,
        }
    }

    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let start = self.curr.span.start;

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier { value: self.curr.literal.clone(), span: self.curr.span };

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        let value = self.skip_deferred();
        let span = self.statement_span(start, &value);
        Some(LetStatement { name, value, span })
    }

    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let start = self.curr.span.start;
        let value = self.skip_deferred();
        let span = self.statement_span(start, &value);
        Some(ReturnStatement { value, span })
    }

    /// Steps past the token before the value, then over everything up to the
    /// next semicolon. Stops silently at EOF when no semicolon follows.
    fn skip_deferred(&mut self) -> Expression {
        self.advance();
        let start = self.curr.span.start;
        let mut end = start;

        while !self.curr_token_is(TokenKind::Semicolon) && !self.is_eof() {
            end = self.curr.span.end;
            self.advance();
        }

        Expression::deferred(Span::new(start, end))
    }

    fn statement_span(&self, start: usize, value: &Expression) -> Span {
        let end = if self.curr_token_is(TokenKind::Semicolon) { self.curr.span.end } else { value.span().end };
        Span::new(start, end)
    }
}

fn dummy_token() -> Token {
    Token::new(TokenKind::EOF, "", Span::default())
}
