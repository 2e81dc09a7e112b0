//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for command results
///
/// This is a domain concept representing how outcomes should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text suitable for a chat message (default)
    Plain,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Plain
    }
}
