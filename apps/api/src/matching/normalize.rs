//! Text normalizer: the single place free text is made comparable.
//! Markup tags become a space, whitespace runs collapse to one space, and
//! the result is lowercased and trimmed. Idempotent.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalizes arbitrary text for substring matching.
/// Never fails; empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let stripped = TAG.replace_all(text, " ");
    let collapsed = WHITESPACE.replace_all(&stripped, " ");
    collapsed.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_markup_and_collapses_whitespace() {
        assert_eq!(normalize("<b>Hi</b>   there"), "hi there");
    }

    #[test]
    fn test_is_idempotent() {
        let once = normalize("<p>Senior   Engineer</p>\n\t Remote");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_empty_input_yields_empty_string() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t  "), "");
    }

    #[test]
    fn test_unclosed_tag_is_kept_literally() {
        assert_eq!(normalize("a < b and c"), "a < b and c");
    }

    #[test]
    fn test_already_normalized_is_untouched() {
        assert_eq!(normalize("hi there"), "hi there");
    }

    #[test]
    fn test_newlines_and_tabs_collapse() {
        assert_eq!(normalize("One\n\nTwo\t\tThree"), "one two three");
    }
}
