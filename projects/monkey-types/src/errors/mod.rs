use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

mod convert;
mod display;

/// The result type of the Monkey crates.
pub type Result<T> = std::result::Result<T, MonkeyError>;

/// A boxed error kind, wrapping a [MonkeyErrorKind].
#[derive(Clone)]
pub struct MonkeyError {
    kind: Box<MonkeyErrorKind>,
}

/// The kind of [MonkeyError].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonkeyErrorKind {
    /// The parser accumulated one or more diagnostics.
    #[error("parsing failed with {} error(s)", .messages.len())]
    Parse { messages: Vec<String> },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl MonkeyError {
    pub fn new(kind: MonkeyErrorKind) -> Self {
        Self { kind: Box::new(kind) }
    }

    pub fn parse(messages: Vec<String>) -> Self {
        Self::new(MonkeyErrorKind::Parse { messages })
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(MonkeyErrorKind::Io { message: message.into() })
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(MonkeyErrorKind::Config { message: message.into() })
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(MonkeyErrorKind::Internal { message: message.into() })
    }

    pub fn kind(&self) -> &MonkeyErrorKind {
        &self.kind
    }

    /// Parser diagnostics carried by a [MonkeyErrorKind::Parse] error, empty otherwise.
    pub fn messages(&self) -> &[String] {
        match self.kind.as_ref() {
            MonkeyErrorKind::Parse { messages } => messages,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let error = MonkeyError::parse(vec![
            "expected next token to be IDENT, got ASSIGN instead".to_string(),
            "expected next token to be ASSIGN, got INT instead".to_string(),
        ]);
        let text = error.to_string();
        assert!(text.starts_with("parsing failed with 2 error(s)"));
        assert!(text.contains("\n\texpected next token to be ASSIGN, got INT instead"));
        assert_eq!(error.messages().len(), 2);
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.mk");
        let error: MonkeyError = io.into();
        assert!(matches!(error.kind(), MonkeyErrorKind::Io { .. }));
        assert!(error.messages().is_empty());
    }
}
