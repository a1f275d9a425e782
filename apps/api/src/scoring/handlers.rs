//! Axum route handlers for the Scoring API.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::scoring::text::word_count;
use crate::scoring::{overall_quality, score_document, OverallQuality, ScoredMetric};

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub html: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub word_count: usize,
    /// Empty when the letter is too short to evaluate.
    pub metrics: Vec<ScoredMetric>,
    pub overall: Option<OverallQuality>,
}

impl ScoreResponse {
    pub fn for_html(html: &str) -> Self {
        let metrics = score_document(html);
        let overall = overall_quality(&metrics);
        Self {
            word_count: word_count(html),
            metrics,
            overall,
        }
    }
}

/// POST /api/v1/cover-letters/score
///
/// Scores letter HTML across the five quality metrics. Never fails for a
/// well-formed JSON body; short letters come back with no metrics.
pub async fn handle_score(Json(request): Json<ScoreRequest>) -> Json<ScoreResponse> {
    Json(ScoreResponse::for_html(&request.html))
}
