use serde::{Deserialize, Serialize};

use crate::scoring::metrics::clamp;
use crate::scoring::ScoredMetric;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum QualityLabel {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs work")]
    NeedsWork,
}

impl QualityLabel {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 90 => QualityLabel::Excellent,
            s if s >= 78 => QualityLabel::Good,
            s if s >= 60 => QualityLabel::Fair,
            _ => QualityLabel::NeedsWork,
        }
    }
}

/// Summary shown above the per-metric breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverallQuality {
    pub score: u32,
    pub label: QualityLabel,
}

/// Rounded mean of the metric scores. `None` when nothing was scored.
pub fn overall_quality(metrics: &[ScoredMetric]) -> Option<OverallQuality> {
    if metrics.is_empty() {
        return None;
    }
    let sum: u32 = metrics.iter().map(|m| m.score).sum();
    let score = clamp(f64::from(sum) / metrics.len() as f64);
    Some(OverallQuality {
        score,
        label: QualityLabel::from_score(score),
    })
}
