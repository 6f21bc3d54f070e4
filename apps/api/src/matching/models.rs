//! Match records produced by the engine. All of them live for one request only.

use serde::{Deserialize, Serialize};

use crate::models::job::JobSummary;

pub const EXPERIENCE_WEIGHT: f64 = 0.3;
pub const SKILLS_WEIGHT: f64 = 0.4;
pub const EDUCATION_WEIGHT: f64 = 0.3;

/// Which scorer produced a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorerBackend {
    Remote,
    Heuristic,
}

/// Scores exactly as a scorer reported them: unclamped and possibly fractional.
/// Also the JSON shape the remote scorer must return.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawScores {
    pub experience: f64,
    pub skills: f64,
    pub education: f64,
    pub overall: f64,
}

/// Validated score breakdown: every value is within 0–100 and `overall`
/// is always the weighted sum of the three sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchDetails {
    experience: u32,
    skills: u32,
    education: u32,
    overall: u32,
}

impl MatchDetails {
    /// Builds details from sub-scores; `overall` is derived, never supplied.
    pub fn new(experience: u32, skills: u32, education: u32) -> Self {
        let experience = experience.min(100);
        let skills = skills.min(100);
        let education = education.min(100);
        Self {
            experience,
            skills,
            education,
            overall: weighted_overall(experience as f64, skills as f64, education as f64),
        }
    }

    /// Clamps and rounds raw sub-scores. The reported `overall` is ignored and recomputed.
    pub fn from_raw(raw: &RawScores) -> Self {
        Self::new(
            clamp_score(raw.experience),
            clamp_score(raw.skills),
            clamp_score(raw.education),
        )
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn skills(&self) -> u32 {
        self.skills
    }

    pub fn education(&self) -> u32 {
        self.education
    }

    pub fn overall(&self) -> u32 {
        self.overall
    }
}

/// `experience*0.3 + skills*0.4 + education*0.3`, rounded and clamped to 0–100.
pub fn weighted_overall(experience: f64, skills: f64, education: f64) -> u32 {
    clamp_score(
        experience * EXPERIENCE_WEIGHT + skills * SKILLS_WEIGHT + education * EDUCATION_WEIGHT,
    )
}

/// Rounds to the nearest integer inside 0–100. Non-finite input scores 0.
pub fn clamp_score(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u32
}

/// One job paired with its score breakdown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub job: JobSummary,
    /// Copy of `match_details.overall`; the primary sort key.
    pub match_score: u32,
    pub match_details: MatchDetails,
    pub scorer_backend: ScorerBackend,
}

impl JobMatch {
    pub fn new(job: JobSummary, match_details: MatchDetails, scorer_backend: ScorerBackend) -> Self {
        Self {
            job,
            match_score: match_details.overall(),
            match_details,
            scorer_backend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_is_weighted_sum() {
        // 80*0.3 + 70*0.4 + 60*0.3 = 24 + 28 + 18 = 70
        let details = MatchDetails::new(80, 70, 60);
        assert_eq!(details.overall(), 70);
    }

    #[test]
    fn test_overall_rounds_to_nearest() {
        // 55*0.3 + 55*0.4 + 56*0.3 = 16.5 + 22 + 16.8 = 55.3
        assert_eq!(MatchDetails::new(55, 55, 56).overall(), 55);
        // 0*0.3 + 0*0.4 + 5*0.3 = 1.5
        assert_eq!(MatchDetails::new(0, 0, 5).overall(), 2);
    }

    #[test]
    fn test_from_raw_clamps_out_of_range_values() {
        let details = MatchDetails::from_raw(&RawScores {
            experience: 140.0,
            skills: -20.0,
            education: 99.6,
            overall: 500.0,
        });
        assert_eq!(details.experience(), 100);
        assert_eq!(details.skills(), 0);
        assert_eq!(details.education(), 100);
        assert_eq!(details.overall(), 60);
    }

    #[test]
    fn test_from_raw_ignores_reported_overall() {
        let details = MatchDetails::from_raw(&RawScores {
            experience: 100.0,
            skills: 100.0,
            education: 100.0,
            overall: 12.0,
        });
        assert_eq!(details.overall(), 100);
    }

    #[test]
    fn test_non_finite_scores_become_zero() {
        assert_eq!(clamp_score(f64::NAN), 0);
        assert_eq!(clamp_score(f64::INFINITY), 0);
    }

    #[test]
    fn test_invariant_holds_across_grid() {
        for e in (0..=100).step_by(7) {
            for s in (0..=100).step_by(11) {
                for ed in (0..=100).step_by(13) {
                    let d = MatchDetails::new(e, s, ed);
                    assert!(d.overall() <= 100);
                    let expected = (e as f64 * 0.3 + s as f64 * 0.4 + ed as f64 * 0.3).round() as u32;
                    assert_eq!(d.overall(), expected);
                }
            }
        }
    }

    #[test]
    fn test_job_match_serializes_camel_case() {
        let job = JobSummary {
            id: "job-1".to_string(),
            title: "Designer".to_string(),
            requirements: "figma".to_string(),
            location: "Улаанбаатар".to_string(),
            salary: None,
            posted_at: None,
        };
        let m = JobMatch::new(job, MatchDetails::new(80, 70, 60), ScorerBackend::Heuristic);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["matchScore"], 70);
        assert_eq!(json["matchDetails"]["skills"], 70);
        assert_eq!(json["scorerBackend"], "heuristic");
    }
}
