use clap::Args;
use monkey_core::Frontend;
use monkey_parser::TokenKind;
use monkey_types::Result;
use std::path::PathBuf;
use tokio::fs;

#[derive(Args)]
pub struct TokensArgs {
    /// The Monkey file to tokenize
    pub file: PathBuf,
    /// Output tokens as JSON, including spans and the final EOF
    #[arg(short, long)]
    pub json: bool,
}

impl TokensArgs {
    pub async fn run(&self) -> Result<()> {
        let source = fs::read_to_string(&self.file).await?;
        let tokens = Frontend::new().tokenize(&source);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        }
        else {
            for token in tokens.iter().filter(|t| t.kind != TokenKind::EOF) {
                println!("{}", token);
            }
        }
        Ok(())
    }
}
