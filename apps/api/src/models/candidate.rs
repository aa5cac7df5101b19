use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One scored resume against one job. At most one row exists per
/// (job_id, resume_name), enforced by a unique index in the store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub recruiter_id: String,
    pub resume_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub years_experience: i32,
    pub found_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub semantic_score: f64,
    pub skill_score: f64,
    pub final_score: f64,
    /// Set when extraction failed or the resume text was empty: the scores
    /// exist but should be reviewed by a human rather than trusted.
    pub needs_review: bool,
    /// Insertion order; the deterministic tie-break when final scores are equal.
    pub seq: i64,
    pub created_at: DateTime<Utc>,
}

/// Candidate fields as produced by the scoring pipeline, before the store
/// assigns seq/created_at. Scores and skill sets are immutable once attached.
#[derive(Debug, Clone)]
pub struct NewCandidate {
    pub id: Uuid,
    pub job_id: Uuid,
    pub recruiter_id: String,
    pub resume_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub years_experience: i32,
    pub found_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub semantic_score: f64,
    pub skill_score: f64,
    pub final_score: f64,
    pub needs_review: bool,
}
