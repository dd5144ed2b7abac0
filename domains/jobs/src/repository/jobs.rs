//! PostgreSQL job repository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use jobtrack_common::Result;

use super::JobRepository;
use crate::domain::entities::Job;

#[derive(Clone)]
pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply the bundled schema migrations
    pub async fn migrate(pool: &PgPool) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(pool).await
    }
}

#[async_trait]
impl JobRepository for PgJobRepository {
    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Job>> {
        let rows = sqlx::query_as::<_, Job>(
            r#"
            SELECT id, company, position, status, created_by, created_at, updated_at
            FROM jobs
            WHERE created_by = $1
            ORDER BY created_at DESC, id ASC
            "#,
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find(&self, owner: &str, id: Uuid) -> Result<Option<Job>> {
        let row = sqlx::query_as::<_, Job>(
            r#"
            SELECT id, company, position, status, created_by, created_at, updated_at
            FROM jobs
            WHERE id = $1 AND created_by = $2
            "#,
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create(&self, job: &Job) -> Result<Job> {
        let row = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (id, company, position, status, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, company, position, status, created_by, created_at, updated_at
            "#,
        )
        .bind(job.id)
        .bind(&job.company)
        .bind(&job.position)
        .bind(job.status)
        .bind(&job.created_by)
        .bind(job.created_at)
        .bind(job.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, job: &Job) -> Result<Option<Job>> {
        let row = sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs SET
                company = $3,
                position = $4,
                status = $5,
                updated_at = $6
            WHERE id = $1 AND created_by = $2
            RETURNING id, company, position, status, created_by, created_at, updated_at
            "#,
        )
        .bind(job.id)
        .bind(&job.created_by)
        .bind(&job.company)
        .bind(&job.position)
        .bind(job.status)
        .bind(job.updated_at)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, owner: &str, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1 AND created_by = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
