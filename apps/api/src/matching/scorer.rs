//! Match Scorer: pluggable, trait-based scoring of one CV against one job's requirements.
//!
//! Backends: `LlmMatchScorer` (remote, may fail) and `HeuristicScorer` (local, never fails).
//! `FallbackScorer` composes them: remote first, heuristic on any failure.
//! `AppState` carries the composed scorer as `Arc<dyn MatchScorer>`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::llm_client::LlmError;
use crate::matching::heuristic::HeuristicScorer;
use crate::matching::models::{RawScores, ScorerBackend};

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("remote scorer failed: {0}")]
    Llm(#[from] LlmError),

    #[error("malformed score payload: {0}")]
    Malformed(String),

    #[error("CV text or job requirements are empty")]
    EmptyInput,

    #[error("remote scorer timed out after {0:?}")]
    Timeout(Duration),
}

/// Raw scores plus the backend that produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreCard {
    pub scores: RawScores,
    pub backend: ScorerBackend,
}

/// The scorer trait. Implementations report raw scores; clamping and the
/// weighted overall are applied by the aggregator, not here.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(&self, cv_text: &str, requirements: &str) -> Result<ScoreCard, ScoringError>;
}

/// Tries `primary`, and on any error scores with the heuristic instead.
/// Never returns an error itself.
pub struct FallbackScorer {
    primary: Arc<dyn MatchScorer>,
    fallback: HeuristicScorer,
}

impl FallbackScorer {
    pub fn new(primary: Arc<dyn MatchScorer>) -> Self {
        Self {
            primary,
            fallback: HeuristicScorer,
        }
    }
}

#[async_trait]
impl MatchScorer for FallbackScorer {
    async fn score(&self, cv_text: &str, requirements: &str) -> Result<ScoreCard, ScoringError> {
        match self.primary.score(cv_text, requirements).await {
            Ok(card) => Ok(card),
            Err(e) => {
                match &e {
                    ScoringError::Llm(llm) if llm.is_rate_limited() => {
                        warn!("Remote scorer rate limited, using heuristic fallback")
                    }
                    _ => warn!("Remote scorer failed ({e}), using heuristic fallback"),
                }
                Ok(self.fallback.evaluate(cv_text, requirements))
            }
        }
    }
}
