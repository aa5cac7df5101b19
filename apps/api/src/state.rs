use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;

use crate::config::Config;
use crate::extract::TextExtractor;
use crate::matching::semantic::Embedder;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable embedding backend. Default: fastembed. Swap via EMBEDDING_BACKEND env.
    pub embedder: Arc<dyn Embedder>,
    pub extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    /// Time budget for a single embedding computation.
    pub fn embed_budget(&self) -> Duration {
        Duration::from_secs(self.config.embed_timeout_secs)
    }
}
