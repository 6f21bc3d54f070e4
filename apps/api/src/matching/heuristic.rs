//! Heuristic Scorer: local keyword/regex scoring used whenever the remote scorer
//! is unavailable. Pure function of its two inputs: no I/O, no failure mode.
//!
//! Experience: "N years experience" in the requirements vs the CV.
//! Skills / education: share of requirement keywords that also appear in the CV.
//! A requirement text with nothing detectable scores 100 (nothing to fail).

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::matching::models::{weighted_overall, RawScores, ScorerBackend};
use crate::matching::normalize::NormalizedText;
use crate::matching::scorer::{MatchScorer, ScoreCard, ScoringError};

/// "5 years of experience", "3-5 years marketing experience", "3 to 5 years of experience",
/// "5 or more years of experience", "2+ yrs worked", "5 жилийн туршлага",
/// "3-5 жилийн маркетингийн туршлага", "3-аас доошгүй жилийн туршлагатай",
/// "2 жилээс дээш ажилласан". For a range or a minimum the lower bound is captured.
static YEARS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(\d{1,2})",
        r"(?:\s*[-–~]\s*\d{1,2}|\s+to\s+\d{1,2}|\s*-?\s*(?:аас|ээс|оос|өөс)(?:\s+\d{1,2})?)?",
        r"\s*\+?\s*(?:or\s+more\s+)?(?:доошгүй\s+|дээш\s+)?",
        r"(?:(?:years?|yrs?)\s+(?:of\s+)?(?:[\w-]+\s+)?(?:experience|worked|working)",
        r"|жил(?:ийн|ээс)?\s+(?:доошгүй\s+|дээш\s+)?(?:[\w-]+\s+)?(?:туршлага|ажилла))",
    ))
    .expect("years pattern is a valid regex")
});

const SKILL_KEYWORDS: &[&str] = &[
    "social media",
    "сошиал медиа",
    "marketing",
    "маркетинг",
    "brand",
    "брэнд",
    "research",
    "судалгаа",
    "customer",
    "хэрэглэгч",
    "team",
    "багийн",
    "management",
    "удирдах",
    "strategy",
    "стратеги",
    "project",
    "төсөл",
    "language",
    "англи хэл",
    "digital",
    "цахим",
    "creative",
    "бүтээлч",
    "communication",
    "харилцаа",
];

const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "бакалавр",
    "master",
    "магистр",
    "phd",
    "доктор",
    "university",
    "их сургууль",
    "college",
    "коллеж",
    "degree",
    "зэрэг",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer;

impl HeuristicScorer {
    /// Scores synchronously. Sub-scores and overall are rounded to integers.
    pub fn evaluate(&self, cv_text: &str, requirements: &str) -> ScoreCard {
        let cv = NormalizedText::new(cv_text);
        let req = NormalizedText::new(requirements);

        let experience = experience_score(&cv, &req).round();
        let skills = keyword_coverage(&cv, &req, SKILL_KEYWORDS).round();
        let education = keyword_coverage(&cv, &req, EDUCATION_KEYWORDS).round();

        ScoreCard {
            scores: RawScores {
                experience,
                skills,
                education,
                overall: weighted_overall(experience, skills, education) as f64,
            },
            backend: ScorerBackend::Heuristic,
        }
    }
}

#[async_trait]
impl MatchScorer for HeuristicScorer {
    async fn score(&self, cv_text: &str, requirements: &str) -> Result<ScoreCard, ScoringError> {
        Ok(self.evaluate(cv_text, requirements))
    }
}

/// First "N years experience" figure in the text, 0 when absent.
fn extract_years(text: &NormalizedText) -> u32 {
    YEARS_PATTERN
        .captures(text.as_str())
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

fn experience_score(cv: &NormalizedText, req: &NormalizedText) -> f64 {
    let required = extract_years(req);
    if required == 0 {
        return 100.0;
    }
    let have = extract_years(cv);
    if have == 0 {
        return 0.0;
    }
    (have as f64 / required as f64 * 100.0).min(100.0)
}

fn keyword_coverage(cv: &NormalizedText, req: &NormalizedText, table: &[&str]) -> f64 {
    let required: Vec<&str> = req.present(table).collect();
    if required.is_empty() {
        return 100.0;
    }
    let matched = required.iter().filter(|kw| cv.contains(kw)).count();
    matched as f64 / required.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years(text: &str) -> u32 {
        extract_years(&NormalizedText::new(text))
    }

    #[test]
    fn test_extract_years_english_phrasings() {
        assert_eq!(years("5 years of experience in sales"), 5);
        assert_eq!(years("Minimum 3+ years experience"), 3);
        assert_eq!(years("2 years marketing experience"), 2);
        assert_eq!(years("7 yrs worked as accountant"), 7);
    }

    #[test]
    fn test_extract_years_mongolian_phrasings() {
        assert_eq!(years("5 жилийн маркетингийн туршлага"), 5);
        assert_eq!(years("4 жил ажилласан"), 4);
        assert_eq!(years("2 жилийн туршлагатай"), 2);
    }

    #[test]
    fn test_extract_years_range_takes_lower_bound() {
        assert_eq!(years("3-5 жилийн туршлага, маркетинг"), 3);
        assert_eq!(years("2 - 4 years of experience"), 2);
        assert_eq!(years("3-аас 5 жилийн туршлага"), 3);
    }

    #[test]
    fn test_extract_years_worded_range_takes_lower_bound() {
        assert_eq!(years("3 to 5 years of experience"), 3);
    }

    #[test]
    fn test_extract_years_minimum_phrasings() {
        assert_eq!(years("5 or more years of experience"), 5);
        assert_eq!(years("3-аас доошгүй жилийн туршлагатай"), 3);
        assert_eq!(years("2 жилээс дээш ажилласан туршлагатай"), 2);
    }

    #[test]
    fn test_extract_years_skips_calendar_ranges() {
        assert_eq!(years("2015-2020 он, 5 жил ажилласан"), 5);
    }

    #[test]
    fn test_worded_range_requirement_uses_minimum() {
        let card = HeuristicScorer.evaluate("3 years of experience", "3 to 5 years of experience");
        assert_eq!(card.scores.experience, 100.0);
    }

    #[test]
    fn test_mongolian_minimum_requirement_is_enforced() {
        let card = HeuristicScorer.evaluate("1 жил ажилласан", "2 жилээс дээш ажилласан туршлагатай");
        assert_eq!(card.scores.experience, 50.0);
    }

    #[test]
    fn test_extract_years_absent_is_zero() {
        assert_eq!(years("Strong communication skills"), 0);
        assert_eq!(years("Founded in 2015, 40 employees"), 0);
    }

    #[test]
    fn test_no_required_years_scores_full_experience() {
        let card = HeuristicScorer.evaluate("fresh graduate", "figma, photoshop");
        assert_eq!(card.scores.experience, 100.0);
    }

    #[test]
    fn test_required_years_missing_from_cv_scores_zero() {
        let card = HeuristicScorer.evaluate("fresh graduate", "3 years experience");
        assert_eq!(card.scores.experience, 0.0);
    }

    #[test]
    fn test_partial_years_scale_linearly() {
        let card = HeuristicScorer.evaluate("2 years of experience", "4 years experience");
        assert_eq!(card.scores.experience, 50.0);
    }

    #[test]
    fn test_experience_capped_at_100() {
        let card = HeuristicScorer.evaluate(
            "5 жилийн маркетингийн туршлага",
            "3-5 жилийн туршлага, маркетинг, сошиал медиа",
        );
        assert_eq!(card.scores.experience, 100.0);
    }

    #[test]
    fn test_skills_coverage_counts_requirement_keywords() {
        // requirements mention marketing, social media, brand; CV covers two of three
        let card = HeuristicScorer.evaluate(
            "Marketing specialist running social media campaigns",
            "Marketing, social media, brand building",
        );
        assert_eq!(card.scores.skills, 67.0);
    }

    #[test]
    fn test_no_detectable_skills_scores_full() {
        let card = HeuristicScorer.evaluate("anything", "valid driving licence");
        assert_eq!(card.scores.skills, 100.0);
        assert_eq!(card.scores.education, 100.0);
    }

    #[test]
    fn test_education_keywords_bilingual() {
        let card = HeuristicScorer.evaluate(
            "МУИС, бакалавр зэрэгтэй",
            "Бакалавр болон түүнээс дээш зэрэгтэй",
        );
        assert_eq!(card.scores.education, 100.0);

        let card = HeuristicScorer.evaluate("High school", "Master degree required");
        assert_eq!(card.scores.education, 0.0);
    }

    #[test]
    fn test_overall_uses_weighted_formula() {
        let card = HeuristicScorer.evaluate("2 years of experience", "4 years experience");
        // experience 50, skills 100, education 100 → 15 + 40 + 30
        assert_eq!(card.scores.overall, 85.0);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let cv = "5 жилийн маркетингийн туршлага, брэнд, сошиал медиа, бакалавр";
        let req = "3-5 жилийн туршлага, маркетинг, сошиал медиа, судалгаа";
        assert_eq!(
            HeuristicScorer.evaluate(cv, req),
            HeuristicScorer.evaluate(cv, req)
        );
    }

    #[test]
    fn test_backend_label_is_heuristic() {
        assert_eq!(
            HeuristicScorer.evaluate("", "").backend,
            ScorerBackend::Heuristic
        );
    }
}
