use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Archived,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub recruiter_id: String,
    /// Immutable after creation, like jd_text. Only required_skills and
    /// status are recruiter-editable.
    pub title: String,
    pub jd_text: String,
    pub required_skills: Vec<String>,
    /// JD embedding computed once at creation; reused for every candidate
    /// comparison so ranking N resumes costs N embeddings, not 2N.
    #[serde(skip_serializing, default)]
    pub jd_embedding: Vec<f64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
