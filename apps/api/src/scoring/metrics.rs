//! The five rule-based metric functions.
//!
//! Every function takes extracted plain text and returns an integer score in
//! `0..=100`. Breakpoints are tuned so a well-written letter lands in the
//! 78–96 range.

use std::sync::LazyLock;

use regex::Regex;

use crate::scoring::text::{sentences, words};

/// Clichés and filler that weaken a letter's tone.
pub const WEAK_PHRASES: &[&str] = &[
    "i am excited to apply",
    "i am writing to express",
    "i am passionate about",
    "dynamic",
    "synergy",
    "leverage",
    "impactful",
    "i would be a great fit",
    "thrilled",
    "delighted",
    "i am confident that",
    "look no further",
    "results-driven",
    "team player",
    "fast-paced environment",
    "go-getter",
    "think outside the box",
    "hard worker",
    "detail-oriented",
    "responsible for",
    "helped with",
    "i feel that",
    "i believe that",
    "to whom it may concern",
];

/// Contractions and casual markers. Matched as substrings, so `ok` also
/// fires inside words such as "look".
pub const CASUAL_MARKERS: &[&str] = &[
    "can't", "won't", "don't", "didn't", "i'm", "i've", "i'd", "it's", "that's", "we're",
    "they're", "you're", "isn't", "aren't", "wasn't", "couldn't", "wouldn't", "shouldn't",
    "hasn't", "haven't", "hadn't", "gonna", "wanna", "gotta", "kinda", "sorta", "yeah", "hey",
    "ok",
];

/// Number-bearing tokens: `$120k`, `34%`, `10x`, `5 years`, `2021`, `100,000`.
static NUMBER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9][0-9,.]*(?:k|m|%|x|\s*years?|\s*months?)?").expect("static regex")
});

const SPECIFICITY_MAX_TOKENS: usize = 6;

/// Rounds half up and bounds to `0..=100`.
pub fn clamp(n: f64) -> u32 {
    (n + 0.5).floor().clamp(0.0, 100.0) as u32
}

/// Clarity from average sentence length. Best around 15 words per sentence.
pub fn score_clarity(text: &str) -> u32 {
    let sents = sentences(text);
    if sents.is_empty() {
        return 0;
    }
    let total_words: usize = sents.iter().map(|s| words(s).len()).sum();
    let avg_len = total_words as f64 / sents.len() as f64;

    if avg_len < 8.0 {
        // choppy
        clamp(50.0 + (avg_len / 8.0) * 30.0)
    } else if avg_len <= 20.0 {
        clamp(80.0 + ((20.0 - avg_len) / 5.0) * 16.0)
    } else {
        // run-on
        clamp(96.0 - (avg_len - 20.0) * 4.0)
    }
}

/// Conciseness from word count against the 300–450 word ideal.
pub fn score_conciseness(text: &str) -> u32 {
    let wc = words(text).len();
    if wc < 50 {
        return 10;
    }
    let wc = wc as f64;
    if wc < 200.0 {
        clamp(40.0 + (wc / 200.0) * 40.0)
    } else if wc <= 450.0 {
        clamp(80.0 + ((wc - 200.0) / 250.0) * 16.0)
    } else if wc <= 600.0 {
        clamp(96.0 - ((wc - 450.0) / 150.0) * 20.0)
    } else {
        clamp(76.0 - ((wc - 600.0) / 100.0) * 8.0)
    }
}

/// Tone: 96 minus 10 per distinct weak phrase present.
pub fn score_tone(text: &str) -> u32 {
    let hits = count_phrase_hits(text, WEAK_PHRASES);
    clamp(96.0 - hits as f64 * 10.0)
}

/// Specificity: 30 plus 11 per number-bearing token, counting at most six.
pub fn score_specificity(text: &str) -> u32 {
    let matches = NUMBER_TOKEN.find_iter(text).count();
    clamp(30.0 + matches.min(SPECIFICITY_MAX_TOKENS) as f64 * 11.0)
}

/// Formality: 97 minus 12 per distinct casual marker present.
pub fn score_formality(text: &str) -> u32 {
    let hits = count_phrase_hits(text, CASUAL_MARKERS);
    clamp(97.0 - hits as f64 * 12.0)
}

/// Number of distinct denylist entries found anywhere in `text`, ignoring case.
fn count_phrase_hits(text: &str, denylist: &[&str]) -> usize {
    let lower = text.to_lowercase();
    denylist.iter().filter(|p| lower.contains(*p)).count()
}
