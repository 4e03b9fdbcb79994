use crate::token::{lookup_ident, Token, TokenKind};
use monkey_types::Span;

/// Byte cursor over an owned copy of the source text.
///
/// `ch` is the byte under `position`, or `0` once the cursor sits past the
/// last byte. End of input is decided from `position`, so a literal NUL in
/// the source still lexes as [TokenKind::Illegal].
#[derive(Debug, Clone)]
pub struct Lexer {
    input: String,
    position: usize,
    read_position: usize,
    ch: u8,
}

impl Lexer {
    pub fn new(input: impl Into<String>) -> Self {
        let mut lexer = Self { input: input.into(), position: 0, read_position: 0, ch: 0 };
        lexer.advance();
        lexer
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Offset of the byte currently under examination.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Produces the next token. Once the input is exhausted every call yields EOF.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.position;

        if self.is_at_end() {
            return Token::new(TokenKind::EOF, "", Span::empty(start));
        }

        let kind = match self.ch {
            b'=' => self.either(b'=', TokenKind::Eq, TokenKind::Assign),
            b'!' => self.either(b'=', TokenKind::NotEq, TokenKind::Bang),
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'/' => TokenKind::Slash,
            b'*' => TokenKind::Asterisk,
            b'<' => TokenKind::Lt,
            b'>' => TokenKind::Gt,
            b';' => TokenKind::Semicolon,
            b',' => TokenKind::Comma,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,

            // Identifiers, keywords and numbers leave the cursor past their last byte
            c if is_letter(c) => {
                self.consume_while(is_letter);
                let literal = &self.input[start..self.position];
                return Token::new(lookup_ident(literal), literal, Span::new(start, self.position));
            }
            c if c.is_ascii_digit() => {
                self.consume_while(|c| c.is_ascii_digit());
                return self.token_from(TokenKind::Int, start);
            }

            c if !c.is_ascii() => {
                let width = self.input[start..].chars().next().map_or(1, char::len_utf8);
                for _ in 1..width {
                    self.advance();
                }
                TokenKind::Illegal
            }
            _ => TokenKind::Illegal,
        };

        self.advance();
        self.token_from(kind, start)
    }

    fn token_from(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(kind, &self.input[start..self.position], Span::new(start, self.position))
    }

    /// Commits to `combined` only when the following byte is `next`.
    fn either(&mut self, next: u8, combined: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek() == next {
            self.advance();
            combined
        }
        else {
            single
        }
    }

    fn peek(&self) -> u8 {
        self.input.as_bytes().get(self.read_position).copied().unwrap_or(0)
    }

    fn advance(&mut self) {
        let bytes = self.input.as_bytes();
        if self.read_position > bytes.len() {
            return;
        }
        self.ch = bytes.get(self.read_position).copied().unwrap_or(0);
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn consume_while<F>(&mut self, mut f: F)
    where
        F: FnMut(u8) -> bool,
    {
        while !self.is_at_end() && f(self.ch) {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        self.consume_while(|c| matches!(c, b' ' | b'\t' | b'\n' | b'\r'));
    }
}

/// Yields every token before EOF.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind == TokenKind::EOF { None } else { Some(token) }
    }
}

fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}
