//! Command parsing.
//!
//! Turns one line of user input into a [`ParsedCommand`], enforcing the
//! command name, the argument count, the raw-text length cap, and mode
//! resolution. Dispatching the parsed command (store reads and writes) is
//! the application layer's job.

use crate::command::lexer::{normalize_smart_quotes, tokenize};
use crate::core::error::DomainError;
use crate::quote::{MAX_QUOTE_LENGTH, VariantMode};

/// The leading token every command must start with
pub const COMMAND_NAME: &str = "quote";

/// Reserved sub-verb that lists stored quotes instead of adding one
pub const LIST_VERB: &str = "list";

/// A successfully parsed command, ready for dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// List all stored quotes; no mutation
    List,
    /// Add a quote under the given variant mode
    Add { text: String, mode: VariantMode },
}

/// Parse one line of user input.
///
/// Accepted shapes:
/// - `quote list`
/// - `quote <text>` (mode defaults to `normal`)
/// - `quote <mode> <text>` with `<mode>` one of `normal`, `uwu`, `piglatin`
///
/// A lone argument that names a mode is treated as that mode applied to its
/// own token (`quote uwu` uwu-ifies the word "uwu"), matching the sub-verb
/// lookup running before the bare-quote fallback.
pub fn parse_command(line: &str) -> Result<ParsedCommand, DomainError> {
    let normalized = normalize_smart_quotes(line);
    let tokens = tokenize(&normalized)?;

    let Some((name, args)) = tokens.split_first() else {
        return Err(DomainError::InvalidCommand("empty command".to_string()));
    };

    if name.as_str() != COMMAND_NAME {
        return Err(DomainError::InvalidCommand(format!(
            "unknown command `{name}`"
        )));
    }

    // Exactly 1 or 2 arguments; everything else is malformed
    if !(1..=2).contains(&args.len()) {
        return Err(DomainError::InvalidCommand(format!(
            "expected 1 or 2 arguments, got {}",
            args.len()
        )));
    }

    let operation = args[0].as_str();

    if operation == LIST_VERB {
        return Ok(ParsedCommand::List);
    }

    // The last argument is the quote text; the length cap applies to the
    // raw input, independent of the transformers' output fallbacks
    let text = args[args.len() - 1].as_str();
    let len = text.chars().count();
    if len > MAX_QUOTE_LENGTH {
        return Err(DomainError::QuoteTooLong {
            len,
            max: MAX_QUOTE_LENGTH,
        });
    }

    let mode = if let Ok(mode) = operation.parse::<VariantMode>() {
        mode
    } else if operation == text {
        VariantMode::Normal
    } else {
        return Err(DomainError::InvalidCommand(format!(
            "unknown mode `{operation}`"
        )));
    };

    Ok(ParsedCommand::Add {
        text: text.to_string(),
        mode,
    })
}
