//! Port for structured command logging.
//!
//! Defines the [`CommandLogger`] trait for recording executed commands to a
//! structured log. This is separate from `tracing`-based operation logs:
//! tracing handles human-readable diagnostic messages, while this port
//! captures an audit trail of commands in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured command event for logging.
pub struct CommandEvent {
    /// Event type identifier (e.g., "quote_added", "command_rejected").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl CommandEvent {
    /// Create a new command event.
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging command events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL
/// line). The `log` method is intentionally synchronous and non-fallible -
/// logging failures must never disrupt command processing.
pub trait CommandLogger: Send + Sync {
    /// Record a command event.
    fn log(&self, event: CommandEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoCommandLogger;

impl CommandLogger for NoCommandLogger {
    fn log(&self, _event: CommandEvent) {}
}
