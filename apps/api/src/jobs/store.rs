use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobRow, JobStatus};

/// Parameters for inserting a new job requirement.
pub struct NewJob<'a> {
    pub id: Uuid,
    pub recruiter_id: &'a str,
    pub title: &'a str,
    pub jd_text: &'a str,
    pub required_skills: &'a [String],
    pub jd_embedding: &'a [f64],
}

pub async fn insert_job(pool: &PgPool, job: NewJob<'_>) -> Result<JobRow, AppError> {
    let row: JobRow = sqlx::query_as(
        r#"
        INSERT INTO jobs (id, recruiter_id, title, jd_text, required_skills, jd_embedding)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(job.id)
    .bind(job.recruiter_id)
    .bind(job.title)
    .bind(job.jd_text)
    .bind(job.required_skills)
    .bind(job.jd_embedding)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_job(pool: &PgPool, id: Uuid) -> Result<JobRow, AppError> {
    let row: Option<JobRow> = sqlx::query_as("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

pub async fn list_jobs(pool: &PgPool, recruiter_id: &str) -> Result<Vec<JobRow>, AppError> {
    let rows: Vec<JobRow> =
        sqlx::query_as("SELECT * FROM jobs WHERE recruiter_id = $1 ORDER BY created_at DESC")
            .bind(recruiter_id)
            .fetch_all(pool)
            .await?;

    Ok(rows)
}

/// Replaces the required skill set. Existing candidate scores are left
/// untouched: they reflect the requirement set in force at upload time.
pub async fn update_skills(
    pool: &PgPool,
    id: Uuid,
    skills: &[String],
) -> Result<JobRow, AppError> {
    let row: Option<JobRow> =
        sqlx::query_as("UPDATE jobs SET required_skills = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(skills)
            .fetch_optional(pool)
            .await?;

    row.ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

pub async fn update_status(
    pool: &PgPool,
    id: Uuid,
    status: JobStatus,
) -> Result<JobRow, AppError> {
    let row: Option<JobRow> =
        sqlx::query_as("UPDATE jobs SET status = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await?;

    row.ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}
