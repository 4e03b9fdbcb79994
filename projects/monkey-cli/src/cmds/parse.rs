use clap::Args;
use monkey_core::Frontend;
use monkey_types::Result;
use std::path::PathBuf;
use tokio::fs;

#[derive(Args)]
pub struct ParseArgs {
    /// The Monkey file to parse
    pub file: PathBuf,
    /// Output the program and diagnostics as JSON
    #[arg(short, long)]
    pub json: bool,
}

impl ParseArgs {
    pub async fn run(&self) -> Result<()> {
        let source = fs::read_to_string(&self.file).await?;
        let output = Frontend::new().parse(&source);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        if !output.program.is_empty() {
            println!("{}", output.program);
        }
        for error in &output.errors {
            eprintln!("\t{}", error);
        }
        println!("Statements: {}", output.program.len());
        println!("Errors: {}", output.errors.len());
        Ok(())
    }
}
