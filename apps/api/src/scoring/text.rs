//! Plain-text extraction and tokenization for letter HTML.
//!
//! Extraction is lossy on purpose: entities such as `&amp;` are replaced by a
//! space rather than decoded, so scores stay comparable with letters scored
//! by the editor front-end.

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("static regex"));

static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&[a-zA-Z]+;").expect("static regex"));

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+(?:\s|$)").expect("static regex"));

/// Sentences this short are stray punctuation or initials, not prose.
/// Measured in UTF-16 code units, the way the editor front-end counts.
const MIN_SENTENCE_UNITS: usize = 5;

/// Strips tags and named entities, collapses whitespace, and trims.
pub fn extract_text(html: &str) -> String {
    let text = TAG.replace_all(html, " ");
    let text = ENTITY.replace_all(&text, " ");
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}

/// Splits text on runs of `.`, `!` or `?` followed by whitespace or the end of input.
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| s.encode_utf16().count() >= MIN_SENTENCE_UNITS)
        .collect()
}

pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Word count of a raw HTML document after extraction.
pub fn word_count(html: &str) -> usize {
    words(&extract_text(html)).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_strips_tags() {
        assert_eq!(
            extract_text("<p>Dear <strong>Hiring</strong> Manager,</p>"),
            "Dear Hiring Manager,"
        );
    }

    #[test]
    fn test_extract_text_separates_adjacent_blocks() {
        assert_eq!(extract_text("<p>first</p><p>second</p>"), "first second");
    }

    #[test]
    fn test_extract_text_destroys_named_entities() {
        // `&amp;` is removed, not decoded to `&`
        assert_eq!(extract_text("Research &amp; Development"), "Research Development");
        assert_eq!(extract_text("a&nbsp;b"), "a b");
        assert_eq!(extract_text("AT&AMP;T"), "AT T");
    }

    #[test]
    fn test_extract_text_keeps_numeric_entities() {
        assert_eq!(extract_text("I&#39;ve"), "I&#39;ve");
    }

    #[test]
    fn test_extract_text_collapses_whitespace() {
        assert_eq!(extract_text("  one\n\n\ttwo   three  "), "one two three");
    }

    #[test]
    fn test_extract_text_tag_spanning_lines() {
        assert_eq!(extract_text("a<span\nclass=\"x\">b"), "a b");
    }

    #[test]
    fn test_extract_text_markup_only_is_empty() {
        assert_eq!(extract_text("<div><br/></div>&nbsp;&amp;"), "");
        assert_eq!(extract_text(""), "");
    }

    #[test]
    fn test_extract_text_unclosed_tag_is_kept() {
        assert_eq!(extract_text("a < b"), "a < b");
    }

    #[test]
    fn test_sentences_split_on_terminators() {
        let text = "First sentence here. Second one follows! Is this the third? Yes it is.";
        assert_eq!(
            sentences(text),
            vec![
                "First sentence here",
                "Second one follows",
                "Is this the third",
                "Yes it is"
            ]
        );
    }

    #[test]
    fn test_sentences_ignore_inner_periods() {
        // No whitespace after the period, so no split
        assert_eq!(sentences("Version 2.5 shipped today."), vec!["Version 2.5 shipped today"]);
    }

    #[test]
    fn test_sentences_collapse_repeated_terminators() {
        assert_eq!(sentences("Really?! Absolutely..."), vec!["Really", "Absolutely"]);
    }

    #[test]
    fn test_sentences_drop_short_fragments() {
        assert_eq!(sentences("Hi. Ok. A longer sentence."), vec!["A longer sentence"]);
        assert_eq!(sentences("abcd. abcde."), vec!["abcde"]);
    }

    #[test]
    fn test_sentence_length_counts_utf16_units() {
        // 😀 is two UTF-16 units, so "abc😀" is long enough to keep
        assert_eq!(sentences("abc😀. Next one here."), vec!["abc😀", "Next one here"]);
        assert_eq!(sentences("abé. Next one here."), vec!["Next one here"]);
    }

    #[test]
    fn test_sentences_without_terminator() {
        assert_eq!(sentences("no terminator at all"), vec!["no terminator at all"]);
        assert!(sentences("").is_empty());
    }

    #[test]
    fn test_words() {
        assert_eq!(words("one two  three"), vec!["one", "two", "three"]);
        assert!(words("").is_empty());
        assert!(words("   ").is_empty());
    }

    #[test]
    fn test_word_count_of_html() {
        assert_eq!(word_count("<p>Dear Hiring Manager,</p><p>I write.</p>"), 5);
        assert_eq!(word_count("<br/>"), 0);
    }
}
