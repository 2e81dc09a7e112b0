//! Port for the quote store.
//!
//! Defines the [`QuoteStore`] trait consumed by the dispatcher: an ordered,
//! append-only collection of stored quotes with set semantics on the
//! rendered display text. Implementations live in the infrastructure layer.

use quip_domain::{Quote, VariantMode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by a quote store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An entry with the same display text already exists
    #[error("quote already exists")]
    Duplicate,
}

/// A quote as handed to the store: the source entity plus the display
/// string it rendered to.
///
/// Rendering happens before storage so the store never has to re-run a
/// fallible transformation; uniqueness keys on `display`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredQuote {
    pub source: String,
    pub mode: VariantMode,
    pub display: String,
}

impl StoredQuote {
    /// Build a stored quote from an entity and its rendered display text
    pub fn new(quote: &Quote, display: impl Into<String>) -> Self {
        Self {
            source: quote.text().to_string(),
            mode: quote.mode(),
            display: display.into(),
        }
    }
}

/// Port for the quote collection.
///
/// `add_quote` must perform its duplicate check and append as one atomic
/// operation - implementations shared across threads hold a single lock
/// for the whole check-and-insert.
pub trait QuoteStore: Send + Sync {
    /// All stored display strings, in insertion order
    fn get_quotes(&self) -> Vec<String>;

    /// Append a quote, rejecting display-text duplicates
    fn add_quote(&self, quote: StoredQuote) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_quote_from_entity() {
        let quote = Quote::new("hello", VariantMode::Piglatin);
        let stored = StoredQuote::new(&quote, "Ellohay");
        assert_eq!(stored.source, "hello");
        assert_eq!(stored.mode, VariantMode::Piglatin);
        assert_eq!(stored.display, "Ellohay");
    }

    #[test]
    fn test_duplicate_error_display() {
        assert_eq!(StoreError::Duplicate.to_string(), "quote already exists");
    }
}
