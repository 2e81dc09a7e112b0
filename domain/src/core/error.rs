//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Quote is too long ({len} characters, maximum {max})")]
    QuoteTooLong { len: usize, max: usize },

    #[error("Transformation had no effect")]
    TransformationNoOp,
}

impl DomainError {
    /// Check if this error was caused by user input shape (rather than content)
    pub fn is_invalid_command(&self) -> bool {
        matches!(self, DomainError::InvalidCommand(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_too_long_display() {
        let error = DomainError::QuoteTooLong { len: 72, max: 50 };
        assert_eq!(
            error.to_string(),
            "Quote is too long (72 characters, maximum 50)"
        );
    }

    #[test]
    fn test_is_invalid_command_check() {
        assert!(DomainError::InvalidCommand("bad".to_string()).is_invalid_command());
        assert!(!DomainError::TransformationNoOp.is_invalid_command());
        assert!(!DomainError::QuoteTooLong { len: 51, max: 50 }.is_invalid_command());
    }
}
