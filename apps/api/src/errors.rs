use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A resume with this name has already been scored for this job.
    /// The existing record is left untouched; the caller decides whether to warn.
    #[error("Resume '{resume_name}' already scored for job {job_id}")]
    DuplicateCandidate { job_id: Uuid, resume_name: String },

    /// The text extractor could not read the file. Callers treat this as
    /// empty text and keep scoring, so this rarely reaches the HTTP layer.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Embedding backend failed or exceeded its time budget. Fatal for the
    /// one resume being scored, never for the batch.
    #[error("Embedding model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Multipart error: {0}")]
    Multipart(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::DuplicateCandidate { .. } => (
                StatusCode::CONFLICT,
                "DUPLICATE_CANDIDATE",
                self.to_string(),
            ),
            AppError::Extraction(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EXTRACTION_ERROR",
                msg.clone(),
            ),
            AppError::ModelUnavailable(msg) => {
                tracing::error!("Embedding backend error: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "MODEL_UNAVAILABLE",
                    "The embedding backend is unavailable".to_string(),
                )
            }
            AppError::Multipart(msg) => (StatusCode::BAD_REQUEST, "MULTIPART_ERROR", msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
