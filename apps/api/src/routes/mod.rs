pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::candidates::handlers as candidates;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job requirements
        .route("/api/v1/jobs", post(jobs::handle_create_job))
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/:id/skills", patch(jobs::handle_update_skills))
        .route("/api/v1/jobs/:id/status", patch(jobs::handle_update_status))
        // Resume scoring and ranking
        .route(
            "/api/v1/jobs/:id/resumes",
            post(candidates::handle_upload_resumes),
        )
        .route(
            "/api/v1/jobs/:id/candidates",
            get(candidates::handle_list_candidates),
        )
        .route(
            "/api/v1/jobs/:id/candidates.csv",
            get(candidates::handle_export_csv),
        )
        .with_state(state)
}
