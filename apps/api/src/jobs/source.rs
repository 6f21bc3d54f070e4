//! Job Source: where the matching engine gets its postings from.
//!
//! `AppState` holds an `Arc<dyn JobSource>`; production uses `PgJobSource`,
//! tests plug in `StaticJobSource`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::models::job::{JobRow, JobSummary};

#[async_trait]
pub trait JobSource: Send + Sync {
    /// Returns every current job posting, newest first.
    async fn list_jobs(&self) -> Result<Vec<JobSummary>, AppError>;
}

/// Reads postings from the `jobs` table.
pub struct PgJobSource {
    pool: PgPool,
}

impl PgJobSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobSource for PgJobSource {
    async fn list_jobs(&self) -> Result<Vec<JobSummary>, AppError> {
        let rows = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT id, title, requirements, location, salary, created_at
            FROM jobs
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("Loaded {} job postings", rows.len());
        Ok(rows.into_iter().map(JobSummary::from).collect())
    }
}

/// Fixed in-memory job list.
#[cfg(test)]
pub struct StaticJobSource(pub Vec<JobSummary>);

#[cfg(test)]
#[async_trait]
impl JobSource for StaticJobSource {
    async fn list_jobs(&self) -> Result<Vec<JobSummary>, AppError> {
        Ok(self.0.clone())
    }
}
