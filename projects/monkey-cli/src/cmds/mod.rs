pub mod check;
mod parse;
pub mod repl;
mod tokens;

pub use check::CheckArgs;
pub use parse::ParseArgs;
pub use repl::ReplArgs;
pub use tokens::TokensArgs;
