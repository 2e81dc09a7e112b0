//! Console output formatting for command outcomes

use colored::Colorize;
use quip_application::CommandOutcome;

/// Notice shown when a submitted quote was already stored
pub const ALREADY_ADDED_NOTICE: &str = "Quote has already been added previously";

/// Enable or disable colored output globally
pub fn set_color_enabled(enabled: bool) {
    if enabled {
        colored::control::unset_override();
    } else {
        colored::control::set_override(false);
    }
}

/// Formats command outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format an outcome as plain text.
    ///
    /// A successful add with no advisory produces no output; the list is
    /// emitted as chat-flavored markdown bullets with exact bytes.
    pub fn format(outcome: &CommandOutcome) -> String {
        match outcome {
            CommandOutcome::Added { warning, .. } => match warning {
                Some(warning) => format!("{} {}", "note:".yellow().bold(), warning),
                None => String::new(),
            },
            CommandOutcome::AlreadyAdded { .. } => ALREADY_ADDED_NOTICE.yellow().to_string(),
            CommandOutcome::Listing(quotes) => quotes
                .iter()
                .map(|quote| format!("- {quote}"))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Format an outcome as JSON
    pub fn format_json(outcome: &CommandOutcome) -> String {
        let value = match outcome {
            CommandOutcome::Added { display, warning } => serde_json::json!({
                "status": "added",
                "display": display,
                "warning": warning.as_ref().map(|w| w.to_string()),
            }),
            CommandOutcome::AlreadyAdded { display } => serde_json::json!({
                "status": "already_added",
                "display": display,
                "notice": ALREADY_ADDED_NOTICE,
            }),
            CommandOutcome::Listing(quotes) => serde_json::json!({
                "status": "list",
                "quotes": quotes,
            }),
        };

        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
