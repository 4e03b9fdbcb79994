use clap::{Parser, Subcommand};

mod cmds;

pub use cmds::{repl, CheckArgs, ParseArgs, ReplArgs, TokensArgs};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct MonkeyApplication {
    /// Runs the REPL when no subcommand is given
    #[command(subcommand)]
    pub command: Option<MonkeyCommands>,
}

#[derive(Subcommand)]
pub enum MonkeyCommands {
    /// Start the interactive console
    Repl(ReplArgs),
    /// Print the tokens of a Monkey file
    Tokens(TokensArgs),
    /// Parse a Monkey file and print its statements
    Parse(ParseArgs),
    /// Check a Monkey file for syntax errors
    Check(CheckArgs),
}
