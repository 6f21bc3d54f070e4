//! Remote scorer: asks the text-completion service for a score breakdown.
//!
//! Every failure (transport, non-2xx, error-code body, unparseable or incomplete
//! JSON, timeout) is returned as a `ScoringError`; `FallbackScorer` turns it
//! into a heuristic score. Values are passed on unclamped.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::llm_client::{LlmClient, LlmError};
use crate::matching::models::{RawScores, ScorerBackend};
use crate::matching::prompts::{build_scoring_prompt, scoring_system_prompt};
use crate::matching::scorer::{MatchScorer, ScoreCard, ScoringError};

pub struct LlmMatchScorer {
    llm: LlmClient,
    system: String,
    timeout: Duration,
}

impl LlmMatchScorer {
    /// `timeout` bounds the whole call, retries included.
    pub fn new(llm: LlmClient, timeout: Duration) -> Self {
        Self {
            llm,
            system: scoring_system_prompt(),
            timeout,
        }
    }
}

#[async_trait]
impl MatchScorer for LlmMatchScorer {
    async fn score(&self, cv_text: &str, requirements: &str) -> Result<ScoreCard, ScoringError> {
        if cv_text.trim().is_empty() || requirements.trim().is_empty() {
            return Err(ScoringError::EmptyInput);
        }

        let prompt = build_scoring_prompt(cv_text, requirements);
        let call = self.llm.call_json::<RawScores>(&prompt, &self.system);

        let scores = tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| ScoringError::Timeout(self.timeout))?
            .map_err(|e| match e {
                LlmError::Parse(parse) => ScoringError::Malformed(parse.to_string()),
                other => ScoringError::Llm(other),
            })?;

        debug!(
            "Remote scores: experience={} skills={} education={} overall={}",
            scores.experience, scores.skills, scores.education, scores.overall
        );

        Ok(ScoreCard {
            scores,
            backend: ScorerBackend::Remote,
        })
    }
}
