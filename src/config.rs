use crate::runtime::script::ReplayMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Runs the trading bot configuration wizard against a recorded event script.
#[derive(Debug, Clone, Parser)]
#[command(name = "tradebot-wizard", version, about)]
pub struct Cli {
    /// YAML schema to use instead of the built-in trading bot schema.
    #[arg(long, value_name = "PATH")]
    pub schema: Option<PathBuf>,

    /// Events to replay (YAML or JSON list).
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Stop at the first rejected event.
    #[arg(long)]
    pub strict: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Print the active schema as YAML and exit.
    #[arg(long)]
    pub print_schema: bool,
}

impl Cli {
    pub fn replay_mode(&self) -> ReplayMode {
        if self.strict {
            ReplayMode::Strict
        } else {
            ReplayMode::Lenient
        }
    }
}
