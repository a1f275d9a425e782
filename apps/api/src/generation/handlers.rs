//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::request::CoverLetterRequest;
use crate::scoring::handlers::ScoreResponse;
use crate::scoring::{OverallQuality, ScoredMetric};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub html: String,
    pub metrics: Vec<ScoredMetric>,
    pub overall: Option<OverallQuality>,
}

/// POST /api/v1/cover-letters/generate
///
/// Validates the form, generates the letter, and scores the result so the
/// editor can show quality metrics without a second round trip.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    request.validate()?;

    let html = state.generator.generate(&request).await?;
    let scored = ScoreResponse::for_html(&html);

    info!(
        "Generated cover letter: {} words, overall {:?}",
        scored.word_count,
        scored.overall.as_ref().map(|o| o.score)
    );

    Ok(Json(GenerateResponse {
        html,
        metrics: scored.metrics,
        overall: scored.overall,
    }))
}
