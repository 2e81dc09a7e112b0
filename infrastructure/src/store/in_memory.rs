//! In-memory quote store.
//!
//! Ordered, append-only within the process lifetime, with set semantics on
//! the rendered display text. The duplicate check and the append run under
//! one lock so the uniqueness invariant holds even when the store is shared
//! across threads.

use quip_application::{QuoteStore, StoreError, StoredQuote};
use std::sync::{Mutex, PoisonError};

/// Quote store backed by a `Mutex`-guarded `Vec`.
///
/// Empty at process start; entries are appended one at a time and never
/// removed.
#[derive(Default)]
pub struct InMemoryQuoteStore {
    quotes: Mutex<Vec<StoredQuote>>,
}

impl InMemoryQuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored quotes
    pub fn len(&self) -> usize {
        self.quotes.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl QuoteStore for InMemoryQuoteStore {
    fn get_quotes(&self) -> Vec<String> {
        self.quotes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|q| q.display.clone())
            .collect()
    }

    fn add_quote(&self, quote: StoredQuote) -> Result<(), StoreError> {
        // Check-and-insert is a single critical section
        let mut quotes = self.quotes.lock().unwrap_or_else(PoisonError::into_inner);

        if quotes.iter().any(|q| q.display == quote.display) {
            return Err(StoreError::Duplicate);
        }

        quotes.push(quote);
        Ok(())
    }
}
