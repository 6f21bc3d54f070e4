//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::engine::MatchResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    /// Plain CV text, already extracted from the uploaded document.
    #[serde(default)]
    pub content: String,
}

/// POST /api/v1/jobs/match
///
/// Scores the CV against every current job and returns the ranked top matches.
/// An empty `matches` list means no job qualified.
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let response = state.engine.match_cv(&request.content).await?;
    Ok(Json(response))
}
