#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::Direction;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "telegram")]
#[command(about = "Convert between text and Morse code")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Never clear the console between prompts
    #[arg(long)]
    pub no_clear: bool,

    /// Translate TEXT to Morse once and exit
    #[arg(long, value_name = "TEXT", conflicts_with = "from_morse")]
    pub to_morse: Option<String>,

    /// Translate Morse CODE to text once and exit
    #[arg(long, value_name = "CODE")]
    pub from_morse: Option<String>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// The message and direction for one-shot mode, if requested.
    pub fn one_shot(&self) -> Option<(Direction, &str)> {
        if let Some(text) = &self.to_morse {
            return Some((Direction::ToMorse, text));
        }
        self.from_morse
            .as_deref()
            .map(|code| (Direction::FromMorse, code))
    }
}
