//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};
use oxford_dictionary::EnvOxfordConfig;
use std::env;

#[derive(Parser, Debug)]
#[command(name = "dbot")]
#[command(about = "Oxford dictionary bot CLI: define, etymology, ask", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Look up the definition of a word or phrase.
    Define {
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },
    /// Look up the etymology of a word or phrase (falls back to the definition).
    Etymology {
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },
    /// Send a chat-style message (e.g. "/ety hound") through the bot's handlers.
    Ask {
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
}

impl Commands {
    /// The free-text argument, words joined by single spaces.
    pub fn text(&self) -> String {
        match self {
            Commands::Define { term } | Commands::Etymology { term } => term.join(" "),
            Commands::Ask { message } => message.join(" "),
        }
    }
}

/// Config for the binary: Oxford API settings plus the log file path.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub oxford: EnvOxfordConfig,
    /// LOG_FILE
    pub log_file: String,
}

impl AppConfig {
    /// Load from environment variables and validate. Load `.env` first.
    pub fn load() -> Result<Self> {
        let oxford = EnvOxfordConfig::from_env();
        oxford.validate()?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/dbot.log".to_string());
        Ok(Self { oxford, log_file })
    }
}
