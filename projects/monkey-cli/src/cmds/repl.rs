use clap::Args;
use monkey_core::{Frontend, MonkeyConfig, ReplConfig, ReplMode, CONFIG_FILE};
use monkey_parser::Lexer;
use monkey_types::Result;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

#[derive(Args)]
pub struct ReplArgs {
    /// Configuration file, ignored when it does not exist
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Print tokens or parsed statements (overrides the config file)
    #[arg(short, long)]
    pub mode: Option<ReplMode>,

    /// Prompt printed before each line (overrides the config file)
    #[arg(short, long)]
    pub prompt: Option<String>,
}

impl Default for ReplArgs {
    fn default() -> Self {
        Self { config: PathBuf::from(CONFIG_FILE), mode: None, prompt: None }
    }
}

impl ReplArgs {
    pub async fn run(&self) -> Result<()> {
        let config = self.resolve()?;
        println!("Monkey REPL ({} mode), press Ctrl-D to exit", config.mode);

        let stdin = BufReader::new(tokio::io::stdin());
        start(stdin, tokio::io::stdout(), &config).await
    }

    fn resolve(&self) -> Result<ReplConfig> {
        let mut config = MonkeyConfig::load_or_default(&self.config)?.repl;
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(prompt) = &self.prompt {
            config.prompt = prompt.clone();
        }
        Ok(config)
    }
}

/// Reads `input` line by line until it is exhausted.
///
/// Every line gets a fresh lexer; nothing carries over between lines.
pub async fn start<R, W>(input: R, mut output: W, config: &ReplConfig) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let frontend = Frontend::new();
    let mut lines = input.lines();

    loop {
        output.write_all(config.prompt.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await?
        else {
            return Ok(());
        };

        let mut rendered = String::new();
        match config.mode {
            ReplMode::Tokens => {
                for token in Lexer::new(line) {
                    rendered.push_str(&format!("{}\n", token));
                }
            }
            ReplMode::Ast => {
                let parsed = frontend.parse(&line);
                if parsed.is_ok() {
                    for statement in &parsed.program.statements {
                        rendered.push_str(&format!("{}\n", statement));
                    }
                }
                else {
                    rendered.push_str("parser errors:\n");
                    for error in &parsed.errors {
                        rendered.push_str(&format!("\t{}\n", error));
                    }
                }
            }
        }

        output.write_all(rendered.as_bytes()).await?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn run_lines(input: &str, mode: ReplMode) -> String {
        let config = ReplConfig { mode, ..ReplConfig::default() };
        let mut output = Vec::new();
        start(input.as_bytes(), &mut output, &config).await.unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_prints_tokens_per_line() {
        let output = run_lines("let x = 5;\n@\n", ReplMode::Tokens).await;

        assert_eq!(
            output,
            ">> {Type:LET Literal:let}\n\
             {Type:IDENT Literal:x}\n\
             {Type:ASSIGN Literal:=}\n\
             {Type:INT Literal:5}\n\
             {Type:SEMICOLON Literal:;}\n\
             >> {Type:ILLEGAL Literal:@}\n\
             >> "
        );
    }

    #[tokio::test]
    async fn test_empty_input_only_prompts() {
        assert_eq!(run_lines("", ReplMode::Tokens).await, ">> ");
        assert_eq!(run_lines("\n", ReplMode::Tokens).await, ">> >> ");
    }

    #[tokio::test]
    async fn test_ast_mode() {
        let output = run_lines("let x = 5; return x;\nlet x 5;\nfoobar;\n", ReplMode::Ast).await;

        assert_eq!(
            output,
            ">> let x = <deferred>;\n\
             return <deferred>;\n\
             >> parser errors:\n\
             \texpected next token to be ASSIGN, got INT instead\n\
             >> >> "
        );
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[repl]\nprompt = \"m> \"\nmode = \"ast\"\n").unwrap();

        let args = ReplArgs { config: path.clone(), mode: None, prompt: None };
        let config = args.resolve().unwrap();
        assert_eq!(config.prompt, "m> ");
        assert_eq!(config.mode, ReplMode::Ast);

        let args = ReplArgs { config: path, mode: Some(ReplMode::Tokens), prompt: None };
        assert_eq!(args.resolve().unwrap().mode, ReplMode::Tokens);
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let args = ReplArgs { config: dir.path().join("absent.toml"), ..ReplArgs::default() };
        assert_eq!(args.resolve().unwrap(), ReplConfig::default());
    }
}
