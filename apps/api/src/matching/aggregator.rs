//! Match Score Aggregator: scores every job against one CV.
//!
//! Jobs are scored concurrently (bounded by `MAX_CONCURRENT_SCORING`), each in
//! its own task with no shared mutable state. A job whose scoring errors or
//! panics is logged and left out; it never fails the batch. Output order is
//! completion order; ranking happens in the pipeline.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info_span, Instrument};

use crate::matching::models::{JobMatch, MatchDetails};
use crate::matching::scorer::{MatchScorer, ScoreCard};
use crate::models::job::JobSummary;

/// Upper bound on in-flight remote scoring calls per request.
const MAX_CONCURRENT_SCORING: usize = 8;

pub async fn score_jobs(
    cv_text: &str,
    jobs: Vec<JobSummary>,
    scorer: Arc<dyn MatchScorer>,
) -> Vec<JobMatch> {
    if jobs.is_empty() {
        return Vec::new();
    }

    let cv_text: Arc<str> = Arc::from(cv_text);
    let permits = Arc::new(Semaphore::new(MAX_CONCURRENT_SCORING));
    let mut tasks = JoinSet::new();

    for job in jobs {
        let scorer = Arc::clone(&scorer);
        let cv_text = Arc::clone(&cv_text);
        let permits = Arc::clone(&permits);
        let span = info_span!("score_job", job_id = %job.id);

        tasks.spawn(
            async move {
                // The semaphore is never closed, so acquiring only waits.
                let _permit = permits.acquire_owned().await.ok();
                let outcome = scorer.score(&cv_text, &job.requirements).await;
                (job, outcome)
            }
            .instrument(span),
        );
    }

    let mut matches = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((job, Ok(card))) => matches.push(build_match(job, card)),
            Ok((job, Err(e))) => error!(job_id = %job.id, "Skipping job, scoring failed: {e}"),
            Err(e) => error!("Skipping job, scoring task aborted: {e}"),
        }
    }

    matches
}

/// Clamps the card's scores, recomputes overall and pairs them with the job.
pub fn build_match(job: JobSummary, card: ScoreCard) -> JobMatch {
    JobMatch::new(job, MatchDetails::from_raw(&card.scores), card.backend)
}
