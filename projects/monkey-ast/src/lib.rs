use std::fmt::{Display, Formatter};

use monkey_types::Span;

pub trait AstNode {
    fn span(&self) -> Span;

    /// Literal of the token the node starts with.
    fn token_literal(&self) -> &str;
}

/// Root of every parse: statements in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl AstNode for Program {
    fn span(&self) -> Span {
        match (self.statements.first(), self.statements.last()) {
            (Some(first), Some(last)) => first.span().merge(last.span()),
            _ => Span::default(),
        }
    }

    fn token_literal(&self) -> &str {
        self.statements.first().map(|s| s.token_literal()).unwrap_or("")
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
}

impl AstNode for Statement {
    fn span(&self) -> Span {
        match self {
            Statement::Let(s) => s.span,
            Statement::Return(s) => s.span,
        }
    }

    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(_) => "let",
            Statement::Return(_) => "return",
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Let(s) => Display::fmt(s, f),
            Statement::Return(s) => Display::fmt(s, f),
        }
    }
}

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LetStatement {
    pub name: Identifier,
    pub value: Expression,
    pub span: Span,
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "let {} = {};", self.name, self.value)
    }
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReturnStatement {
    pub value: Expression,
    pub span: Span,
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "return {};", self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    pub value: String,
    pub span: Span,
}

impl AstNode for Identifier {
    fn span(&self) -> Span {
        self.span
    }

    fn token_literal(&self) -> &str {
        &self.value
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Value position of a statement.
///
/// Expressions are recognized but not yet parsed: the parser records the
/// source range it skipped over as [Expression::Deferred].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expression {
    Deferred(DeferredExpr),
}

impl Expression {
    pub fn deferred(span: Span) -> Self {
        Expression::Deferred(DeferredExpr { span })
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Expression::Deferred(_))
    }
}

impl AstNode for Expression {
    fn span(&self) -> Span {
        match self {
            Expression::Deferred(e) => e.span,
        }
    }

    fn token_literal(&self) -> &str {
        ""
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Deferred(_) => f.write_str("<deferred>"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeferredExpr {
    pub span: Span,
}
