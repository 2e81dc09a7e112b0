//! Application layer for quip
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    command_logger::{CommandEvent, CommandLogger, NoCommandLogger},
    quote_store::{QuoteStore, StoreError, StoredQuote},
};
pub use use_cases::run_command::{CommandOutcome, RunCommandError, RunCommandUseCase};
