use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::store::{self, NewJob};
use crate::matching::semantic::embed_with_timeout;
use crate::matching::skills::{builtin_vocabulary, extract_skills, parse_skill_list};
use crate::matching::text::normalize;
use crate::models::job::{JobRow, JobStatus};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateJobRequest {
    pub recruiter_id: String,
    pub title: String,
    pub jd_text: String,
    /// Comma-separated skill list. When absent or empty, required skills are
    /// auto-extracted from the JD text against the built-in vocabulary.
    #[serde(default)]
    pub required_skills: Option<String>,
}

#[derive(Deserialize)]
pub struct RecruiterQuery {
    pub recruiter_id: String,
}

/// POST /api/v1/jobs
///
/// Creates a job requirement and computes its JD embedding exactly once;
/// every later candidate comparison reuses the stored vector.
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(req): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<JobRow>), AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::Validation("title must not be empty".to_string()));
    }
    if req.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text must not be empty".to_string()));
    }

    let jd_normalized = normalize(&req.jd_text);

    let required_skills = match req.required_skills.as_deref().map(parse_skill_list) {
        Some(skills) if !skills.is_empty() => skills,
        _ => extract_skills(&jd_normalized, &builtin_vocabulary()),
    };

    let jd_embedding: Vec<f64> =
        embed_with_timeout(state.embedder.as_ref(), &jd_normalized, state.embed_budget())
            .await?
            .into_iter()
            .map(f64::from)
            .collect();

    let skills: Vec<String> = required_skills.into_iter().collect();
    let job = store::insert_job(
        &state.db,
        NewJob {
            id: Uuid::new_v4(),
            recruiter_id: &req.recruiter_id,
            title: req.title.trim(),
            jd_text: &req.jd_text,
            required_skills: &skills,
            jd_embedding: &jd_embedding,
        },
    )
    .await?;

    info!(
        "Created job {} ('{}') with {} required skills",
        job.id,
        job.title,
        job.required_skills.len()
    );
    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/v1/jobs?recruiter_id=
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<RecruiterQuery>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    let jobs = store::list_jobs(&state.db, &params.recruiter_id).await?;
    Ok(Json(jobs))
}

#[derive(Deserialize)]
pub struct UpdateSkillsRequest {
    /// Comma-separated; malformed entries are trimmed or dropped silently.
    pub skills: String,
}

#[derive(Serialize)]
pub struct UpdateSkillsResponse {
    pub job: JobRow,
    /// Existing candidate scores are never recomputed after a skill edit;
    /// they reflect the requirement set in force at upload time.
    pub rescored: bool,
}

/// PATCH /api/v1/jobs/:id/skills
pub async fn handle_update_skills(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateSkillsRequest>,
) -> Result<Json<UpdateSkillsResponse>, AppError> {
    let skills: Vec<String> = parse_skill_list(&req.skills).into_iter().collect();
    let job = store::update_skills(&state.db, id, &skills).await?;

    info!("Updated skills for job {id}: {} entries", skills.len());
    Ok(Json(UpdateSkillsResponse {
        job,
        rescored: false,
    }))
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: JobStatus,
}

/// PATCH /api/v1/jobs/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<JobRow>, AppError> {
    let job = store::update_status(&state.db, id, req.status).await?;
    Ok(Json(job))
}
