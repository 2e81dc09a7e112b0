//! Run Command use case.
//!
//! Executes one line of user input against the quote store: parse, pick the
//! operation, render the quote through its variant transformer, and either
//! list or insert. A duplicate insert is the one expected collision - it is
//! converted into an informational outcome instead of propagating.

use crate::ports::command_logger::{CommandEvent, CommandLogger, NoCommandLogger};
use crate::ports::quote_store::{QuoteStore, StoreError, StoredQuote};
use quip_domain::core::string::truncate;
use quip_domain::{DomainError, ParsedCommand, Quote, TransformWarning, parse_command};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum RunCommandError {
    /// Malformed command, over-length text, or a no-effect transformation
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// What a successfully executed command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A quote was rendered and inserted; `warning` carries the uwu
    /// partial-transform advisory when one was raised
    Added {
        display: String,
        warning: Option<TransformWarning>,
    },
    /// The rendered display text was already stored; nothing was inserted
    AlreadyAdded { display: String },
    /// Display strings of all stored quotes, in insertion order
    Listing(Vec<String>),
}

/// Use case for running a single quote command.
///
/// Stateless between invocations apart from the injected store; each call
/// is independent given the store's current contents.
pub struct RunCommandUseCase {
    store: Arc<dyn QuoteStore>,
    command_logger: Arc<dyn CommandLogger>,
}

impl RunCommandUseCase {
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self {
            store,
            command_logger: Arc::new(NoCommandLogger),
        }
    }

    /// Create with a command logger.
    pub fn with_command_logger(mut self, logger: Arc<dyn CommandLogger>) -> Self {
        self.command_logger = logger;
        self
    }

    /// Execute one command line.
    pub fn execute(&self, line: &str) -> Result<CommandOutcome, RunCommandError> {
        let result = self.run(line);

        if let Err(e) = &result {
            self.command_logger.log(CommandEvent::new(
                "command_rejected",
                json!({ "command": line, "error": e.to_string() }),
            ));
        }

        result
    }

    fn run(&self, line: &str) -> Result<CommandOutcome, RunCommandError> {
        debug!("Parsing command: {}", truncate(line, 80));

        match parse_command(line)? {
            ParsedCommand::List => {
                let quotes = self.store.get_quotes();
                debug!("Listing {} stored quotes", quotes.len());
                Ok(CommandOutcome::Listing(quotes))
            }
            ParsedCommand::Add { text, mode } => {
                let quote = Quote::new(text, mode);
                let rendered = quote.render()?;

                if let Some(warning) = rendered.warning {
                    warn!("{}", warning);
                }

                match self
                    .store
                    .add_quote(StoredQuote::new(&quote, rendered.text.as_str()))
                {
                    Ok(()) => {
                        info!("Added {} quote: {}", mode, truncate(&rendered.text, 80));
                        self.command_logger.log(CommandEvent::new(
                            "quote_added",
                            json!({
                                "source": quote.text(),
                                "mode": mode,
                                "display": rendered.text,
                                "partial": rendered.warning.is_some(),
                            }),
                        ));
                        Ok(CommandOutcome::Added {
                            display: rendered.text,
                            warning: rendered.warning,
                        })
                    }
                    Err(StoreError::Duplicate) => {
                        info!("Duplicate quote ignored: {}", truncate(&rendered.text, 80));
                        self.command_logger.log(CommandEvent::new(
                            "duplicate_quote",
                            json!({ "display": rendered.text }),
                        ));
                        Ok(CommandOutcome::AlreadyAdded {
                            display: rendered.text,
                        })
                    }
                }
            }
        }
    }
}
