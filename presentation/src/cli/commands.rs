//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Plain text suitable for a chat message
    Plain,
    /// JSON output
    Json,
}

impl From<OutputFormat> for quip_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => quip_domain::OutputFormat::Plain,
            OutputFormat::Json => quip_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for quip
#[derive(Parser, Debug)]
#[command(name = "quip")]
#[command(author, version, about = "Quote keeper - collects unique quotes with stylistic variants")]
#[command(long_about = r#"
Quip parses quote commands, optionally transforms the quote text into a
stylistic variant, and stores unique quotes for later listing.

Supported commands:
  quote <text>            - add a quote as written
  quote uwu <text>        - uwu-ify the quote, then add it
  quote piglatin <text>   - piglatin-ify the quote, then add it
  quote list              - list stored quotes as markdown bullets

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./quip.toml         Project-level config
3. ~/.config/quip/config.toml   Global config

Example:
  quip 'quote "A journey of a thousand miles begins with a single step"'
  quip 'quote uwu "hello rascal"'
  quip --chat
"#)]
pub struct Cli {
    /// The command line to run (not required in chat mode)
    pub command: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
