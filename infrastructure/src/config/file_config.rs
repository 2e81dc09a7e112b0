//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use quip_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

// Re-export OutputFormat from domain for convenience
pub use quip_domain::OutputFormat as FileOutputFormat;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("repl.history_size cannot be 0")]
    InvalidHistorySize,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            format: None,
        }
    }
}

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Persist input history across sessions
    pub history: bool,
    /// Maximum number of history entries to keep
    pub history_size: Option<usize>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            history: true,
            history_size: None,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Path of the JSONL command log; logging is off when unset
    pub command_log: Option<PathBuf>,
}

/// Complete raw configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub output: FileOutputConfig,
    pub repl: FileReplConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate semantic constraints that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.repl.history_size == Some(0) {
            return Err(ConfigValidationError::InvalidHistorySize);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert!(config.output.color);
        assert_eq!(config.output.format, None);
        assert!(config.repl.history);
        assert_eq!(config.repl.history_size, None);
        assert_eq!(config.logging.command_log, None);
    }

    #[test]
    fn test_parse_full_config() {
        let config: FileConfig = toml::from_str(
            r#"
            [output]
            color = false
            format = "json"

            [repl]
            history = false
            history_size = 200

            [logging]
            command_log = "/tmp/quip-commands.jsonl"
            "#,
        )
        .unwrap();

        assert!(!config.output.color);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.repl.history);
        assert_eq!(config.repl.history_size, Some(200));
        assert_eq!(
            config.logging.command_log,
            Some(PathBuf::from("/tmp/quip-commands.jsonl"))
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: FileConfig = toml::from_str("[output]\ncolor = false\n").unwrap();
        assert!(!config.output.color);
        assert!(config.repl.history);
    }

    #[test]
    fn test_validate_rejects_zero_history_size() {
        let config: FileConfig = toml::from_str("[repl]\nhistory_size = 0\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidHistorySize)
        ));
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(FileConfig::default().validate().is_ok());
    }
}
