//! Quote entity

use crate::core::error::DomainError;
use crate::quote::transform::{self, Transformed};
use crate::quote::variant::VariantMode;
use serde::{Deserialize, Serialize};

/// A quote bound to the variant mode selected for it
///
/// Immutable once constructed. The display string is a pure function of the
/// two fields and is recomputed on every [`render()`](Quote::render) call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    text: String,
    mode: VariantMode,
}

impl Quote {
    /// Create a new quote
    pub fn new(text: impl Into<String>, mode: VariantMode) -> Self {
        Self {
            text: text.into(),
            mode,
        }
    }

    /// Get the raw quote text as the user entered it
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the selected variant mode
    pub fn mode(&self) -> VariantMode {
        self.mode
    }

    /// Render the display string for this quote.
    ///
    /// Dispatches to the transformer registered for `mode`; the match is
    /// exhaustive over the closed [`VariantMode`] set, so no mode can reach
    /// this point without one. `Normal` is the identity and is the only
    /// mode exempt from the no-op check.
    pub fn render(&self) -> Result<Transformed, DomainError> {
        match self.mode {
            VariantMode::Normal => Ok(Transformed {
                text: self.text.clone(),
                warning: None,
            }),
            VariantMode::Uwu => transform::uwu(&self.text),
            VariantMode::Piglatin => transform::piglatin(&self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_mode_is_identity() {
        let quote = Quote::new("hello world", VariantMode::Normal);
        let rendered = quote.render().unwrap();
        assert_eq!(rendered.text, "hello world");
        assert_eq!(rendered.warning, None);
    }

    #[test]
    fn test_normal_mode_never_noops() {
        // Identity output equals the input by definition; that is fine
        // for Normal, unlike the transforming modes
        assert!(Quote::new("same", VariantMode::Normal).render().is_ok());
    }

    #[test]
    fn test_render_dispatches_by_mode() {
        assert_eq!(
            Quote::new("hello", VariantMode::Uwu).render().unwrap().text,
            "hewwo"
        );
        assert_eq!(
            Quote::new("hello", VariantMode::Piglatin)
                .render()
                .unwrap()
                .text,
            "Ellohay"
        );
    }

    #[test]
    fn test_render_is_recomputed_and_stable() {
        let quote = Quote::new("hello", VariantMode::Piglatin);
        assert_eq!(quote.render().unwrap(), quote.render().unwrap());
    }

    #[test]
    fn test_render_propagates_noop_error() {
        let quote = Quote::new("good dog", VariantMode::Uwu);
        assert!(matches!(
            quote.render(),
            Err(DomainError::TransformationNoOp)
        ));
    }
}
