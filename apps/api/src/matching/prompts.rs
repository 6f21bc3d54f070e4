// LLM prompt constants for CV-to-job scoring.
// The weights stated here mirror models::{EXPERIENCE,SKILLS,EDUCATION}_WEIGHT;
// the model's own `overall` is recomputed locally regardless.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// Scoring rubric sent as the system message.
pub const SCORING_RUBRIC: &str = r#"You are a job matching expert for the Mongolian job market. CV and job texts may be in Mongolian, English or both.
Analyze the CV content against the job requirements and rate the match.

The response must be a JSON object in this exact format:
{
  "experience": number,
  "skills": number,
  "education": number,
  "overall": number
}

1. Experience Match (30% of total): years of experience, relevant roles, project and industry experience.
2. Skills Match (40% of total): core skills for the role, technical skills, tools, languages.
3. Education Match (30% of total): relevant degree, certifications, training.

Each score must be between 0 and 100.
overall = experience * 0.3 + skills * 0.4 + education * 0.3"#;

/// Full system prompt: rubric plus the shared JSON-only rules.
pub fn scoring_system_prompt() -> String {
    format!("{SCORING_RUBRIC}\n\n{JSON_ONLY_SYSTEM}")
}

/// User message embedding both texts.
pub fn build_scoring_prompt(cv_text: &str, requirements: &str) -> String {
    format!(
        "CV Content: {cv_text}\n\nJob Requirements: {requirements}\n\nReturn match scores as JSON:"
    )
}
