use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `jobs` table as far as matching is concerned.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: String,
    pub title: String,
    pub requirements: Option<String>,
    pub location: String,
    pub salary: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Read-only view of a job posting consumed by the matching engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: String,
    pub title: String,
    pub requirements: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
}

impl From<JobRow> for JobSummary {
    fn from(row: JobRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            requirements: row.requirements.unwrap_or_default(),
            location: row.location,
            salary: row.salary.filter(|s| !s.trim().is_empty()),
            posted_at: Some(row.created_at),
        }
    }
}
