use clap::Parser;
use monkey_cli::{MonkeyApplication, MonkeyCommands, ReplArgs};

#[tokio::main]
async fn main() -> monkey_types::Result<()> {
    let cli = MonkeyApplication::parse();

    match cli.command {
        Some(MonkeyCommands::Repl(args)) => args.run().await?,
        Some(MonkeyCommands::Tokens(args)) => args.run().await?,
        Some(MonkeyCommands::Parse(args)) => args.run().await?,
        Some(MonkeyCommands::Check(args)) => args.run().await?,
        None => ReplArgs::default().run().await?,
    }

    Ok(())
}
