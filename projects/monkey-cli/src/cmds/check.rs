use clap::Args;
use monkey_core::Frontend;
use monkey_types::Result;
use std::path::PathBuf;
use tokio::fs;

#[derive(Args)]
pub struct CheckArgs {
    /// The Monkey file to check
    pub file: PathBuf,
}

impl CheckArgs {
    pub async fn run(&self) -> Result<()> {
        let source = fs::read_to_string(&self.file).await?;
        let program = Frontend::new().check(&source)?;
        println!("Check successful! ({} statements)", program.len());
        Ok(())
    }
}
