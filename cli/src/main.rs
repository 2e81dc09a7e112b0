//! CLI entrypoint for quip
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use quip_application::RunCommandUseCase;
use quip_infrastructure::{ConfigLoader, InMemoryQuoteStore, JsonlCommandLogger};
use quip_presentation::{ChatRepl, Cli, ConsoleFormatter, set_color_enabled};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting quip");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load and validate configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    config.validate()?;

    if cli.no_color || !config.output.color {
        set_color_enabled(false);
    }

    // Output format: CLI flag wins over the config file
    let format = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let store = Arc::new(InMemoryQuoteStore::new());
    let mut use_case = RunCommandUseCase::new(store);

    if let Some(path) = &config.logging.command_log
        && let Some(logger) = JsonlCommandLogger::new(path)
    {
        info!("Logging commands to {}", logger.path().display());
        use_case = use_case.with_command_logger(Arc::new(logger));
    }

    // Chat mode
    if cli.chat {
        let repl = ChatRepl::new(use_case)
            .with_history(config.repl.history)
            .with_history_size(config.repl.history_size)
            .with_format(format);

        repl.run()?;
        return Ok(());
    }

    // Single command mode - a command is required
    let command = match cli.command {
        Some(c) => c,
        None => bail!("Command is required. Use --chat for interactive mode."),
    };

    let outcome = use_case.execute(&command)?;

    let output = match format {
        quip_domain::OutputFormat::Plain => ConsoleFormatter::format(&outcome),
        quip_domain::OutputFormat::Json => ConsoleFormatter::format_json(&outcome),
    };

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
