//! Variant transformer functions.
//!
//! Each transformer is a pure function from quote text to a [`Transformed`]
//! result. Output identical to the input is rejected with
//! [`DomainError::TransformationNoOp`] - a transformation that changes
//! nothing is a user input error, not a silent success.

use crate::core::error::DomainError;
use crate::core::string::capitalize_first;
use crate::quote::MAX_QUOTE_LENGTH;

/// A successfully transformed quote.
///
/// `warning` carries the non-fatal advisory raised when the uwu transformer
/// falls back to its partially-applied form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub text: String,
    pub warning: Option<TransformWarning>,
}

impl Transformed {
    fn clean(text: String) -> Self {
        Self {
            text,
            warning: None,
        }
    }
}

/// Non-fatal advisory attached to a successful transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformWarning {
    /// The fully transformed result exceeded the length cap, so only the
    /// letter-substitution step was kept
    PartiallyTransformed,
}

impl std::fmt::Display for TransformWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformWarning::PartiallyTransformed => {
                write!(f, "Quote too long, only partially transformed")
            }
        }
    }
}

/// Transform a quote to its uwu variant.
///
/// Replaces `l`/`r` with `w` (case-preserving), then prefixes every word
/// beginning with `u`/`U` with its own first letter and a hyphen. If the
/// stuttered result exceeds [`MAX_QUOTE_LENGTH`] characters, the stutter
/// step is dropped and a [`TransformWarning::PartiallyTransformed`]
/// advisory is attached instead.
pub fn uwu(quote: &str) -> Result<Transformed, DomainError> {
    let base: String = quote
        .chars()
        .map(|c| match c {
            'l' | 'r' => 'w',
            'L' | 'R' => 'W',
            other => other,
        })
        .collect();

    let stuttered = base
        .split_whitespace()
        .map(|word| match word.chars().next() {
            Some(first @ ('u' | 'U')) => format!("{first}-{word}"),
            _ => word.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");

    // The fallback keeps the substituted text with its original spacing;
    // its length is deliberately not re-checked.
    let (text, warning) = if stuttered.chars().count() > MAX_QUOTE_LENGTH {
        (base, Some(TransformWarning::PartiallyTransformed))
    } else {
        (stuttered, None)
    };

    if text == quote {
        return Err(DomainError::TransformationNoOp);
    }

    Ok(Transformed { text, warning })
}

/// Transform a quote to its pig-latin variant.
///
/// The whole input is lowercased first; each word is rendered per
/// [`word_to_piglatin`], words are re-joined with single spaces, and only
/// the first character of the joined result is capitalized. A result over
/// [`MAX_QUOTE_LENGTH`] characters discards the transformation entirely and
/// falls back to the unmodified input - which then trips the no-op check by
/// design.
pub fn piglatin(quote: &str) -> Result<Transformed, DomainError> {
    let lowered = quote.to_lowercase();
    let joined = lowered
        .split_whitespace()
        .map(word_to_piglatin)
        .collect::<Vec<_>>()
        .join(" ");
    let result = capitalize_first(&joined);

    let text = if result.chars().count() > MAX_QUOTE_LENGTH {
        quote.to_string()
    } else {
        result
    };

    if text == quote {
        return Err(DomainError::TransformationNoOp);
    }

    Ok(Transformed::clean(text))
}

/// Render a single (already lowercased) word in pig-latin.
///
/// Word starting with a vowel: append `way`. First vowel later: move the
/// leading consonant cluster to the end and append `ay`. No vowel at all:
/// the word is left unchanged - a degenerate case, not an error.
fn word_to_piglatin(word: &str) -> String {
    let first_vowel = word
        .char_indices()
        .find(|(_, c)| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));

    match first_vowel {
        Some((0, _)) => format!("{word}way"),
        Some((idx, _)) => format!("{}{}ay", &word[idx..], &word[..idx]),
        None => word.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uwu_letter_substitution() {
        let result = uwu("hello rascal").unwrap();
        assert_eq!(result.text, "hewwo wascaw");
        assert_eq!(result.warning, None);
    }

    #[test]
    fn test_uwu_stutter_prefix() {
        assert_eq!(uwu("uwu").unwrap().text, "u-uwu");
        assert_eq!(uwu("Unreal").unwrap().text, "U-Unweaw");
    }

    #[test]
    fn test_uwu_stutter_applies_after_substitution() {
        // 'l'/'r' are replaced first, then the stutter looks at the
        // substituted words
        assert_eq!(uwu("ultra").unwrap().text, "u-uwtwa");
    }

    #[test]
    fn test_uwu_no_effect_is_error() {
        assert!(matches!(uwu("hey hey"), Err(DomainError::TransformationNoOp)));
        assert!(matches!(uwu("good dog"), Err(DomainError::TransformationNoOp)));
        assert!(matches!(uwu(""), Err(DomainError::TransformationNoOp)));
    }

    #[test]
    fn test_uwu_length_fallback_keeps_substitution() {
        // 49 characters of u-words: stuttering pushes it over 50, the
        // substituted text survives with an advisory
        let quote = "ulu ulu ulu ulu ulu ulu ulu ulu ulu ulu ulu ulu u";
        let result = uwu(quote).unwrap();
        assert_eq!(result.text, "uwu uwu uwu uwu uwu uwu uwu uwu uwu uwu uwu uwu u");
        assert_eq!(result.warning, Some(TransformWarning::PartiallyTransformed));
    }

    #[test]
    fn test_uwu_fallback_identical_to_input_is_error() {
        // No l/r to substitute, so the fallback equals the input and the
        // no-op check fires even though stuttering would have changed it
        let quote = "uuu uuu uuu uuu uuu uuu uuu uuu uuu uuu uuu uuu u";
        assert!(matches!(uwu(quote), Err(DomainError::TransformationNoOp)));
    }

    #[test]
    fn test_uwu_collapses_whitespace_when_stuttering() {
        assert_eq!(uwu("up  down").unwrap().text, "u-up down");
    }

    #[test]
    fn test_piglatin_leading_consonant_cluster() {
        assert_eq!(piglatin("hello").unwrap().text, "Ellohay");
        assert_eq!(piglatin("the").unwrap().text, "Ethay");
    }

    #[test]
    fn test_piglatin_leading_vowel() {
        assert_eq!(piglatin("apple").unwrap().text, "Appleway");
    }

    #[test]
    fn test_piglatin_word_without_vowel_unchanged() {
        assert_eq!(piglatin("tsk tsk bad").unwrap().text, "Tsk tsk adbay");
    }

    #[test]
    fn test_piglatin_sentence_capitalization_only() {
        // Capitalized at the start of the whole result, not per word
        assert_eq!(piglatin("The Quick Fox").unwrap().text, "Ethay uickqay oxfay");
    }

    #[test]
    fn test_piglatin_length_fallback_is_noop_error() {
        // Every word grows by two characters, pushing the result past the
        // cap; the fallback returns the input verbatim, which the no-op
        // check then rejects - the designed failure path
        let quote = "strength strength strength strength strength s";
        assert!(matches!(piglatin(quote), Err(DomainError::TransformationNoOp)));
    }

    #[test]
    fn test_piglatin_empty_is_noop_error() {
        assert!(matches!(piglatin(""), Err(DomainError::TransformationNoOp)));
    }

    #[test]
    fn test_word_to_piglatin_cases() {
        assert_eq!(word_to_piglatin("east"), "eastway");
        assert_eq!(word_to_piglatin("string"), "ingstray");
        assert_eq!(word_to_piglatin("tsk"), "tsk");
    }
}
