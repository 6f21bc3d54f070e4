use std::sync::Arc;

use crate::jobs::source::JobSource;
use crate::matching::engine::MatchEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable job source. Default: PgJobSource.
    pub jobs: Arc<dyn JobSource>,
    /// Remote-first scorer with heuristic fallback, wired to the same job source.
    pub engine: MatchEngine,
}

#[cfg(test)]
pub fn test_state(jobs: Vec<crate::models::job::JobSummary>) -> AppState {
    use crate::jobs::source::StaticJobSource;
    use crate::matching::heuristic::HeuristicScorer;
    use crate::matching::pipeline::DEFAULT_MATCH_LIMIT;

    let jobs: Arc<dyn JobSource> = Arc::new(StaticJobSource(jobs));
    AppState {
        engine: MatchEngine::new(
            Arc::clone(&jobs),
            Arc::new(HeuristicScorer),
            DEFAULT_MATCH_LIMIT,
        ),
        jobs,
    }
}
