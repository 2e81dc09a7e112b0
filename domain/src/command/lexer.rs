//! Command line tokenization.
//!
//! Splits a raw command line into tokens with shell-style quoting, so a
//! quote's text may contain spaces when wrapped in quote characters.
//! Curly/smart double quotes are normalized first so text pasted from
//! rich-text sources tokenizes the same as hand-typed text.

use crate::core::error::DomainError;

/// Replace curly/smart double quotes with plain double quotes
pub fn normalize_smart_quotes(line: &str) -> String {
    line.replace(['\u{201C}', '\u{201D}'], "\"")
}

/// Tokenize a command line with shell-style quoting rules.
///
/// Whitespace separates tokens. Single-quoted spans are taken literally;
/// double-quoted spans honor `\"` and `\\` escapes; a backslash outside
/// quotes escapes the next character. Adjacent spans concatenate into one
/// token (`he"llo wor"ld` is a single token).
///
/// An unterminated quote or a trailing backslash is an
/// [`DomainError::InvalidCommand`].
pub fn tokenize(line: &str) -> Result<Vec<String>, DomainError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            '\'' => {
                in_token = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(ch) => current.push(ch),
                        None => {
                            return Err(DomainError::InvalidCommand(
                                "no closing quotation".to_string(),
                            ));
                        }
                    }
                }
            }
            '"' => {
                in_token = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(esc @ ('"' | '\\')) => current.push(esc),
                            Some(other) => {
                                current.push('\\');
                                current.push(other);
                            }
                            None => {
                                return Err(DomainError::InvalidCommand(
                                    "no closing quotation".to_string(),
                                ));
                            }
                        },
                        Some(ch) => current.push(ch),
                        None => {
                            return Err(DomainError::InvalidCommand(
                                "no closing quotation".to_string(),
                            ));
                        }
                    }
                }
            }
            '\\' => {
                in_token = true;
                match chars.next() {
                    Some(ch) => current.push(ch),
                    None => {
                        return Err(DomainError::InvalidCommand(
                            "trailing escape character".to_string(),
                        ));
                    }
                }
            }
            ch => {
                in_token = true;
                current.push(ch);
            }
        }
    }

    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_whitespace() {
        assert_eq!(
            tokenize("quote uwu hello").unwrap(),
            vec!["quote", "uwu", "hello"]
        );
        assert_eq!(tokenize("  quote   list  ").unwrap(), vec!["quote", "list"]);
    }

    #[test]
    fn test_empty_line_yields_no_tokens() {
        assert_eq!(tokenize("").unwrap(), Vec::<String>::new());
        assert_eq!(tokenize("   ").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_double_quoted_span_keeps_spaces() {
        assert_eq!(
            tokenize("quote \"hello world\"").unwrap(),
            vec!["quote", "hello world"]
        );
    }

    #[test]
    fn test_single_quoted_span_is_literal() {
        assert_eq!(
            tokenize("quote 'say \"hi\" twice'").unwrap(),
            vec!["quote", "say \"hi\" twice"]
        );
    }

    #[test]
    fn test_adjacent_spans_concatenate() {
        assert_eq!(tokenize("he\"llo wor\"ld").unwrap(), vec!["hello world"]);
    }

    #[test]
    fn test_escapes_inside_double_quotes() {
        assert_eq!(
            tokenize("\"she said \\\"no\\\"\"").unwrap(),
            vec!["she said \"no\""]
        );
    }

    #[test]
    fn test_backslash_outside_quotes() {
        assert_eq!(tokenize("don\\'t").unwrap(), vec!["don't"]);
    }

    #[test]
    fn test_empty_quoted_token() {
        assert_eq!(tokenize("quote \"\"").unwrap(), vec!["quote", ""]);
    }

    #[test]
    fn test_unterminated_quote_is_invalid() {
        assert!(matches!(
            tokenize("quote \"hello"),
            Err(DomainError::InvalidCommand(_))
        ));
        assert!(matches!(
            tokenize("quote 'hello"),
            Err(DomainError::InvalidCommand(_))
        ));
    }

    #[test]
    fn test_trailing_backslash_is_invalid() {
        assert!(matches!(
            tokenize("quote hello\\"),
            Err(DomainError::InvalidCommand(_))
        ));
    }

    #[test]
    fn test_normalize_smart_quotes() {
        assert_eq!(
            normalize_smart_quotes("quote \u{201C}hello world\u{201D}"),
            "quote \"hello world\""
        );
    }

    #[test]
    fn test_smart_quotes_then_tokenize() {
        let normalized = normalize_smart_quotes("quote uwu \u{201C}real talk\u{201D}");
        assert_eq!(
            tokenize(&normalized).unwrap(),
            vec!["quote", "uwu", "real talk"]
        );
    }
}
