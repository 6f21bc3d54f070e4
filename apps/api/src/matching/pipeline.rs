//! Filter/Rank pipeline: decides which scored matches are shown and in what order.
//!
//! Filtering:
//! - uncategorized CV: keep when overall ≥ 50
//! - categorized CV: drop every job of another (or no) category; within the
//!   category keep when skills ≥ 40 and overall ≥ 40 (exact title) / ≥ 50 (otherwise)
//!
//! Ranking: exact-title first, then overall, skills, experience (all descending).
//! The sort is stable, so remaining ties keep input order.

use std::cmp::Ordering;

use tracing::debug;

use crate::matching::category::{classify, classify_job, has_exact_title_match, Category};
use crate::matching::models::JobMatch;
use crate::matching::normalize::NormalizedText;

pub const DEFAULT_MATCH_LIMIT: usize = 10;

const MIN_OVERALL: u32 = 50;
const MIN_OVERALL_EXACT_TITLE: u32 = 40;
const MIN_SKILLS: u32 = 40;

/// Outcome of the pipeline. An empty `matches` means "no qualifying job",
/// not a scoring failure.
#[derive(Debug, Clone)]
pub struct RankedMatches {
    pub cv_category: Option<Category>,
    pub matches: Vec<JobMatch>,
}

struct Candidate {
    exact_title: bool,
    job_match: JobMatch,
}

pub fn filter_and_rank(matches: Vec<JobMatch>, cv_text: &str, limit: usize) -> RankedMatches {
    let cv_category = classify(&NormalizedText::new(cv_text));
    let scored = matches.len();

    let mut candidates: Vec<Candidate> = matches
        .into_iter()
        .filter_map(|job_match| admit(cv_category, job_match))
        .collect();

    candidates.sort_by(rank_order);
    candidates.truncate(limit);

    debug!(
        "Filter/rank: cv_category={:?}, scored={}, kept={}",
        cv_category.map(Category::name),
        scored,
        candidates.len()
    );

    RankedMatches {
        cv_category,
        matches: candidates.into_iter().map(|c| c.job_match).collect(),
    }
}

/// Applies the filtering policy; `None` drops the match.
fn admit(cv_category: Option<Category>, job_match: JobMatch) -> Option<Candidate> {
    let details = job_match.match_details;

    let Some(category) = cv_category else {
        return (details.overall() >= MIN_OVERALL).then_some(Candidate {
            exact_title: false,
            job_match,
        });
    };

    if classify_job(&job_match.job) != Some(category) {
        return None;
    }

    let exact_title = has_exact_title_match(&job_match.job.title, category);
    let min_overall = if exact_title {
        MIN_OVERALL_EXACT_TITLE
    } else {
        MIN_OVERALL
    };

    let keep = details.overall() >= min_overall && details.skills() >= MIN_SKILLS;
    keep.then_some(Candidate {
        exact_title,
        job_match,
    })
}

fn rank_order(a: &Candidate, b: &Candidate) -> Ordering {
    let (da, db) = (&a.job_match.match_details, &b.job_match.match_details);
    b.exact_title
        .cmp(&a.exact_title)
        .then_with(|| db.overall().cmp(&da.overall()))
        .then_with(|| db.skills().cmp(&da.skills()))
        .then_with(|| db.experience().cmp(&da.experience()))
}
