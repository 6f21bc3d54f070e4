//! Matching Engine: the caller-facing entry point (CV text in, ranked matches out).

use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::source::JobSource;
use crate::matching::aggregator::score_jobs;
use crate::matching::category::Category;
use crate::matching::models::JobMatch;
use crate::matching::pipeline::filter_and_rank;
use crate::matching::scorer::MatchScorer;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub request_id: Uuid,
    pub cv_category: Option<Category>,
    pub jobs_considered: usize,
    pub matches: Vec<JobMatch>,
}

#[derive(Clone)]
pub struct MatchEngine {
    jobs: Arc<dyn JobSource>,
    scorer: Arc<dyn MatchScorer>,
    limit: usize,
}

impl MatchEngine {
    pub fn new(jobs: Arc<dyn JobSource>, scorer: Arc<dyn MatchScorer>, limit: usize) -> Self {
        Self {
            jobs,
            scorer,
            limit,
        }
    }

    /// Scores `cv_text` against every current job and returns the filtered,
    /// ranked top matches. Rejects empty CV text; an empty result is not an error.
    pub async fn match_cv(&self, cv_text: &str) -> Result<MatchResponse, AppError> {
        if cv_text.trim().is_empty() {
            return Err(AppError::Validation("CV content is required".to_string()));
        }

        let request_id = Uuid::new_v4();
        let jobs = self.jobs.list_jobs().await?;
        let jobs_considered = jobs.len();

        info!(
            "[{request_id}] Matching CV ({} chars) against {jobs_considered} jobs",
            cv_text.chars().count()
        );

        let scored = score_jobs(cv_text, jobs, Arc::clone(&self.scorer)).await;
        let scored_count = scored.len();
        let ranked = filter_and_rank(scored, cv_text, self.limit);

        info!(
            "[{request_id}] Scored {scored_count}/{jobs_considered} jobs, {} qualifying (cv_category={})",
            ranked.matches.len(),
            ranked.cv_category.map(Category::name).unwrap_or("none")
        );

        Ok(MatchResponse {
            request_id,
            cv_category: ranked.cv_category,
            jobs_considered,
            matches: ranked.matches,
        })
    }
}
