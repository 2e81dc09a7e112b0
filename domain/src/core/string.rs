//! String utilities for the domain layer.

/// Uppercase the first character of a string, leaving the rest untouched
/// (UTF-8 safe)
///
/// Matches natural sentence capitalization rather than title case.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first_ascii() {
        assert_eq!(capitalize_first("ellohay"), "Ellohay");
        assert_eq!(capitalize_first("already Upper"), "Already Upper");
    }

    #[test]
    fn test_capitalize_first_empty() {
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_capitalize_first_non_letter() {
        assert_eq!(capitalize_first("'quoted'"), "'quoted'");
        assert_eq!(capitalize_first("1st place"), "1st place");
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("über alles", 20), "über alles");
        // 'ü' is 2 bytes; max_len=8 -> target=5, which is a char boundary
        assert_eq!(truncate("übermäßig lang", 8), "über...");
    }
}
