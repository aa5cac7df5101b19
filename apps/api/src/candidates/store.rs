use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{CandidateRow, NewCandidate};

/// Result of the atomic conditional insert.
#[derive(Debug)]
pub enum InsertOutcome {
    Inserted(CandidateRow),
    AlreadyExists,
}

/// Atomic insert-if-absent keyed on (job_id, resume_name).
///
/// This is the dedup discipline, not a read-then-write pair: the unique index
/// plus ON CONFLICT DO NOTHING guarantees exactly one row lands even when two
/// sessions upload the same resume for the same job concurrently.
pub async fn insert_if_absent(
    pool: &PgPool,
    candidate: &NewCandidate,
) -> Result<InsertOutcome, AppError> {
    let row: Option<CandidateRow> = sqlx::query_as(
        r#"
        INSERT INTO candidates (
            id, job_id, recruiter_id, resume_name, email, phone,
            years_experience, found_skills, matched_skills, missing_skills,
            semantic_score, skill_score, final_score, needs_review
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        ON CONFLICT (job_id, resume_name) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(candidate.id)
    .bind(candidate.job_id)
    .bind(&candidate.recruiter_id)
    .bind(&candidate.resume_name)
    .bind(&candidate.email)
    .bind(&candidate.phone)
    .bind(candidate.years_experience)
    .bind(&candidate.found_skills)
    .bind(&candidate.matched_skills)
    .bind(&candidate.missing_skills)
    .bind(candidate.semantic_score)
    .bind(candidate.skill_score)
    .bind(candidate.final_score)
    .bind(candidate.needs_review)
    .fetch_optional(pool)
    .await?;

    Ok(match row {
        Some(row) => InsertOutcome::Inserted(row),
        None => InsertOutcome::AlreadyExists,
    })
}

/// Cheap duplicate pre-check, run before any embedding work. The atomic
/// insert above remains the correctness backstop under races.
pub async fn exists(pool: &PgPool, job_id: Uuid, resume_name: &str) -> Result<bool, AppError> {
    let found: bool = sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM candidates WHERE job_id = $1 AND resume_name = $2)",
    )
    .bind(job_id)
    .bind(resume_name)
    .fetch_one(pool)
    .await?;

    Ok(found)
}

/// All candidates for a job in insertion order; ranking is a read-time sort
/// on top of this (see matching::rank).
pub async fn list_by_job(pool: &PgPool, job_id: Uuid) -> Result<Vec<CandidateRow>, AppError> {
    let rows: Vec<CandidateRow> =
        sqlx::query_as("SELECT * FROM candidates WHERE job_id = $1 ORDER BY seq ASC")
            .bind(job_id)
            .fetch_all(pool)
            .await?;

    Ok(rows)
}
