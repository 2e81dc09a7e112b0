//! Presentation layer for quip
//!
//! This crate contains CLI definitions, output formatters,
//! and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use output::{ALREADY_ADDED_NOTICE, ConsoleFormatter, set_color_enabled};
