//! Axum route handlers for job listings.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::job::JobSummary;
use crate::state::AppState;

/// GET /api/v1/jobs
///
/// Returns all current job postings, newest first.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobSummary>>, AppError> {
    let jobs = state.jobs.list_jobs().await?;
    Ok(Json(jobs))
}
