use axum::{
    extract::{Multipart, Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::candidates::export::shortlist_csv;
use crate::candidates::store::{self, InsertOutcome};
use crate::errors::AppError;
use crate::extract::extract_or_empty;
use crate::jobs::store::get_job;
use crate::matching::pipeline::{score_resume, MatchContext};
use crate::matching::rank::{ranked, shortlisted};
use crate::models::candidate::{CandidateRow, NewCandidate};
use crate::models::job::JobRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UploadQuery {
    pub recruiter_id: String,
}

/// Per-file outcome of a batch upload. One resume failing or being a
/// duplicate never aborts the rest of the batch.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UploadOutcome {
    Scored {
        resume_name: String,
        candidate: Box<CandidateRow>,
    },
    Duplicate {
        resume_name: String,
    },
    Failed {
        resume_name: String,
        reason: String,
    },
}

/// POST /api/v1/jobs/:id/resumes?recruiter_id=
///
/// Multipart batch upload. The job context (required skills + JD embedding)
/// is built once and shared across every file in the batch.
pub async fn handle_upload_resumes(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Query(params): Query<UploadQuery>,
    mut multipart: Multipart,
) -> Result<Json<Vec<UploadOutcome>>, AppError> {
    let job = get_job(&state.db, job_id).await?;
    let ctx = MatchContext {
        job_id: job.id,
        required_skills: job.required_skills.iter().cloned().collect(),
        jd_embedding: job.jd_embedding.iter().map(|v| *v as f32).collect(),
    };

    let mut outcomes = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Multipart(e.to_string()))?
    {
        let resume_name = field.file_name().unwrap_or("resume.pdf").to_string();
        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                outcomes.push(UploadOutcome::Failed {
                    resume_name,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        match score_and_store(&state, &ctx, &job, &params.recruiter_id, &resume_name, &bytes)
            .await
        {
            Ok(candidate) => {
                info!(
                    "Scored '{resume_name}' for job {job_id}: final {:.2}",
                    candidate.final_score
                );
                outcomes.push(UploadOutcome::Scored {
                    resume_name,
                    candidate: Box::new(candidate),
                });
            }
            Err(AppError::DuplicateCandidate { .. }) => {
                warn!("Duplicate upload of '{resume_name}' for job {job_id}, skipped");
                outcomes.push(UploadOutcome::Duplicate { resume_name });
            }
            Err(e) => {
                error!("Scoring '{resume_name}' for job {job_id} failed: {e}");
                outcomes.push(UploadOutcome::Failed {
                    resume_name,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(Json(outcomes))
}

/// Scores one resume and commits it. The duplicate pre-check runs before any
/// embedding work; the store's atomic insert catches what the pre-check
/// cannot under concurrent uploads.
async fn score_and_store(
    state: &AppState,
    ctx: &MatchContext,
    job: &JobRow,
    recruiter_id: &str,
    resume_name: &str,
    bytes: &[u8],
) -> Result<CandidateRow, AppError> {
    if store::exists(&state.db, ctx.job_id, resume_name).await? {
        return Err(AppError::DuplicateCandidate {
            job_id: ctx.job_id,
            resume_name: resume_name.to_string(),
        });
    }

    let (raw_text, extraction_failed) =
        extract_or_empty(state.extractor.as_ref(), resume_name, bytes);

    let scored = score_resume(
        ctx,
        state.embedder.as_ref(),
        state.embed_budget(),
        &raw_text,
        extraction_failed,
    )
    .await?;

    let candidate = NewCandidate {
        id: Uuid::new_v4(),
        job_id: job.id,
        recruiter_id: recruiter_id.to_string(),
        resume_name: resume_name.to_string(),
        email: scored.contact.email,
        phone: scored.contact.phone,
        years_experience: scored.contact.years_experience,
        found_skills: scored.found_skills.into_iter().collect(),
        matched_skills: scored.report.matched.into_iter().collect(),
        missing_skills: scored.report.missing.into_iter().collect(),
        semantic_score: scored.report.semantic_score,
        skill_score: scored.report.skill_score,
        final_score: scored.report.final_score,
        needs_review: scored.needs_review,
    };

    match store::insert_if_absent(&state.db, &candidate).await? {
        InsertOutcome::Inserted(row) => Ok(row),
        InsertOutcome::AlreadyExists => Err(AppError::DuplicateCandidate {
            job_id: ctx.job_id,
            resume_name: resume_name.to_string(),
        }),
    }
}

#[derive(Deserialize)]
pub struct RankQuery {
    #[serde(default)]
    pub shortlisted: Option<bool>,
}

/// GET /api/v1/jobs/:id/candidates?shortlisted=
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Query(params): Query<RankQuery>,
) -> Result<Json<Vec<CandidateRow>>, AppError> {
    // 404 for unknown jobs rather than an empty list.
    get_job(&state.db, job_id).await?;

    let rows = store::list_by_job(&state.db, job_id).await?;
    let result: Vec<CandidateRow> = if params.shortlisted == Some(true) {
        shortlisted(rows).collect()
    } else {
        ranked(rows).collect()
    };

    Ok(Json(result))
}

/// GET /api/v1/jobs/:id/candidates.csv
pub async fn handle_export_csv(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Response, AppError> {
    get_job(&state.db, job_id).await?;

    let rows = store::list_by_job(&state.db, job_id).await?;
    let csv = shortlist_csv(rows)?;

    Ok((
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        csv,
    )
        .into_response())
}
