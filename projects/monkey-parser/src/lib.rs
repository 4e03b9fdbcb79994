pub mod lexer;
pub mod parser;
pub mod token;

pub use lexer::Lexer;
pub use parser::Parser;
pub use token::{lookup_ident, Token, TokenKind, KEYWORDS};
