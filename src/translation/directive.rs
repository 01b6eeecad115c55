//! Inline `[from>to]` language directive parsing.

use regex::Regex;
use std::sync::LazyLock;

/// Source language used when the directive does not name one.
pub const AUTO: &str = "auto";

/// Target language used when the directive does not name one.
pub const DEFAULT_TARGET: &str = "vi";

#[allow(clippy::unwrap_used)]
static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    // unwrap is safe: pattern is a compile-time constant
    Regex::new(r"\[(.*)?\]").unwrap()
});

/// Source and target language codes for one translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub from: String,
    pub to: String,
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            from: AUTO.to_string(),
            to: DEFAULT_TARGET.to_string(),
        }
    }
}

/// Input text with its directive removed, plus the resolved languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub text: String,
    pub languages: LanguagePair,
}

/// Extracts the first bracketed directive from `raw`.
///
/// The bracket interior is split on `>`: a non-empty left side sets the
/// source, a non-empty right side sets the target. A bare `vi` source flips
/// the default target to `en`, and an explicit target always wins over that
/// flip. The matched brackets are removed even when the interior is
/// malformed. Codes are not validated here.
pub fn parse_directive(raw: &str) -> ParsedInput {
    let mut languages = LanguagePair::default();

    let Some(caps) = DIRECTIVE.captures(raw) else {
        return ParsedInput {
            text: raw.trim().to_string(),
            languages,
        };
    };

    let interior = caps.get(1).map_or("", |m| m.as_str());
    let mut parts = interior.split('>');
    let from = parts.next().unwrap_or_default();
    let to = parts.next().unwrap_or_default();

    if !from.is_empty() {
        languages.from = from.to_string();
    }
    if from == "vi" {
        languages.to = "en".to_string();
    }
    if !to.is_empty() {
        languages.to = to.to_string();
    }

    // Group 0 always participates in a successful match
    let range = caps.get(0).map_or(0..0, |m| m.range());
    let mut text = String::with_capacity(raw.len());
    text.push_str(&raw[..range.start]);
    text.push_str(&raw[range.end..]);

    ParsedInput {
        text: text.trim().to_string(),
        languages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(from: &str, to: &str) -> LanguagePair {
        LanguagePair {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn test_no_directive_uses_defaults() {
        let parsed = parse_directive("good morning");
        assert_eq!(parsed.text, "good morning");
        assert_eq!(parsed.languages, pair("auto", "vi"));
    }

    #[test]
    fn test_no_directive_is_trimmed() {
        let parsed = parse_directive("  good morning \n");
        assert_eq!(parsed.text, "good morning");
        assert_eq!(parsed.languages, LanguagePair::default());
    }

    #[test]
    fn test_full_directive() {
        let parsed = parse_directive("hello [en>fr]");
        assert_eq!(parsed.text, "hello");
        assert_eq!(parsed.languages, pair("en", "fr"));
    }

    #[test]
    fn test_directive_anywhere_in_text() {
        let parsed = parse_directive("[ja>en] おはよう");
        assert_eq!(parsed.text, "おはよう");
        assert_eq!(parsed.languages, pair("ja", "en"));
    }

    #[test]
    fn test_directive_in_the_middle_leaves_inner_spacing() {
        let parsed = parse_directive("good [en>de] night");
        assert_eq!(parsed.text, "good  night");
    }

    #[test]
    fn test_vietnamese_source_flips_target_to_english() {
        let parsed = parse_directive("hello [vi]");
        assert_eq!(parsed.text, "hello");
        assert_eq!(parsed.languages, pair("vi", "en"));
    }

    #[test]
    fn test_explicit_target_overrides_flip() {
        let parsed = parse_directive("hello [vi>vi]");
        assert_eq!(parsed.languages, pair("vi", "vi"));
    }

    #[test]
    fn test_vietnamese_source_with_empty_target_keeps_flip() {
        let parsed = parse_directive("hello [vi>]");
        assert_eq!(parsed.languages, pair("vi", "en"));
    }

    #[test]
    fn test_source_only() {
        let parsed = parse_directive("bonjour [fr]");
        assert_eq!(parsed.languages, pair("fr", "vi"));
    }

    #[test]
    fn test_target_only() {
        let parsed = parse_directive("[>ja] thank you");
        assert_eq!(parsed.text, "thank you");
        assert_eq!(parsed.languages, pair("auto", "ja"));
    }

    #[test]
    fn test_empty_brackets_are_stripped() {
        let parsed = parse_directive("hi []");
        assert_eq!(parsed.text, "hi");
        assert_eq!(parsed.languages, LanguagePair::default());
    }

    #[test]
    fn test_lone_arrow_is_stripped() {
        let parsed = parse_directive("hi [>]");
        assert_eq!(parsed.text, "hi");
        assert_eq!(parsed.languages, LanguagePair::default());
    }

    #[test]
    fn test_extra_arrows_are_ignored() {
        let parsed = parse_directive("hi [en>fr>de]");
        assert_eq!(parsed.languages, pair("en", "fr"));
    }

    #[test]
    fn test_directive_only_leaves_empty_text() {
        let parsed = parse_directive("  [en>fr]  ");
        assert!(parsed.text.is_empty());
        assert_eq!(parsed.languages, pair("en", "fr"));
    }

    #[test]
    fn test_match_is_greedy_to_last_bracket() {
        let parsed = parse_directive("a [en] b [fr] c");
        assert_eq!(parsed.text, "a  c");
        assert_eq!(parsed.languages, pair("en] b [fr", "vi"));
    }

    #[test]
    fn test_directive_does_not_span_lines() {
        let parsed = parse_directive("[en\n>fr] x");
        assert_eq!(parsed.text, "[en\n>fr] x");
        assert_eq!(parsed.languages, LanguagePair::default());
    }

    #[test]
    fn test_unclosed_bracket_is_plain_text() {
        let parsed = parse_directive("hello [en>fr");
        assert_eq!(parsed.text, "hello [en>fr");
        assert_eq!(parsed.languages, LanguagePair::default());
    }

    #[test]
    fn test_codes_are_not_validated() {
        let parsed = parse_directive("hello [xx>yy]");
        assert_eq!(parsed.languages, pair("xx", "yy"));
    }
}
