//! Document Quality Scorer — deterministic, rule-based analysis of letter HTML.
//!
//! No AI involved. Five metrics (Clarity, Conciseness, Tone, Specificity,
//! Formality) are computed independently over the extracted plain text and
//! always returned together, in that order.
//!
//! Documents under `MIN_SCOREABLE_WORDS` words are not scored at all; callers
//! get an empty list and should hide the quality panel.

pub mod handlers;
pub mod metrics;
pub mod overall;
pub mod text;

use serde::Serialize;
use tracing::debug;

use crate::scoring::metrics::{
    score_clarity, score_conciseness, score_formality, score_specificity, score_tone,
};
use crate::scoring::text::{extract_text, words};

pub use overall::{overall_quality, OverallQuality};

pub const MIN_SCOREABLE_WORDS: usize = 30;

/// Display grouping for a metric. Has no effect on scoring.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorKey {
    Blue,
    Violet,
    Green,
    Orange,
    Rose,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScoredMetric {
    pub label: &'static str,
    /// 0 – 100
    pub score: u32,
    pub color_key: ColorKey,
    pub hint: &'static str,
}

struct MetricSpec {
    label: &'static str,
    color_key: ColorKey,
    hint: &'static str,
    score: fn(&str) -> u32,
}

const METRICS: &[MetricSpec] = &[
    MetricSpec {
        label: "Clarity",
        color_key: ColorKey::Blue,
        hint: "How easy each sentence is to read",
        score: score_clarity,
    },
    MetricSpec {
        label: "Conciseness",
        color_key: ColorKey::Violet,
        hint: "Word count vs ideal length (300–450 words)",
        score: score_conciseness,
    },
    MetricSpec {
        label: "Tone",
        color_key: ColorKey::Green,
        hint: "Absence of clichés and weak filler phrases",
        score: score_tone,
    },
    MetricSpec {
        label: "Specificity",
        color_key: ColorKey::Orange,
        hint: "Use of numbers, metrics, and concrete evidence",
        score: score_specificity,
    },
    MetricSpec {
        label: "Formality",
        color_key: ColorKey::Rose,
        hint: "Professional language, no contractions",
        score: score_formality,
    },
];

/// Scores a cover letter HTML string across all metrics.
/// Returns an empty list when the document has fewer than 30 words.
pub fn score_document(html: &str) -> Vec<ScoredMetric> {
    let text = extract_text(html);
    let word_count = words(&text).len();
    if word_count < MIN_SCOREABLE_WORDS {
        debug!(
            "Skipping scoring: {word_count} words is below the {MIN_SCOREABLE_WORDS} word minimum"
        );
        return Vec::new();
    }

    METRICS
        .iter()
        .map(|spec| ScoredMetric {
            label: spec.label,
            score: (spec.score)(&text),
            color_key: spec.color_key,
            hint: spec.hint,
        })
        .collect()
}
