use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use monkey_types::{MonkeyError, Result};
use serde::{Deserialize, Serialize};

/// Default name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "monkey.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonkeyConfig {
    #[serde(default)]
    pub repl: ReplConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default)]
    pub mode: ReplMode,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self { prompt: default_prompt(), mode: ReplMode::default() }
    }
}

fn default_prompt() -> String {
    ">> ".to_string()
}

/// What the console loop does with each line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplMode {
    /// Print every token of the line.
    #[default]
    Tokens,
    /// Parse the line and print statements or diagnostics.
    Ast,
}

impl Display for ReplMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplMode::Tokens => f.write_str("tokens"),
            ReplMode::Ast => f.write_str("ast"),
        }
    }
}

impl FromStr for ReplMode {
    type Err = MonkeyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tokens" => Ok(ReplMode::Tokens),
            "ast" => Ok(ReplMode::Ast),
            _ => Err(MonkeyError::config(format!("unknown REPL mode `{}`, expected `tokens` or `ast`", s))),
        }
    }
}

impl MonkeyConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads `path` when it exists, otherwise falls back to the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() { Self::from_file(path) } else { Ok(Self::default()) }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
