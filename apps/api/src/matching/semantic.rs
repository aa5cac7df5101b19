//! Semantic similarity between JD and resume text via sentence embeddings.
//!
//! `AppState` holds an `Arc<dyn Embedder>`, selected at startup:
//! - `FastEmbedEmbedder` — all-MiniLM-L6-v2 through fastembed. The model
//!   identity is frozen: changing it invalidates comparability of stored
//!   scores.
//! - `HashEmbedder` — deterministic token-hash vectors for tests and
//!   model-free deployments.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tracing::info;

use crate::errors::AppError;
use crate::matching::scoring::round2;

/// Dimensionality of all-MiniLM-L6-v2; the hash backend mirrors it so the
/// two are interchangeable at the call site.
pub const EMBEDDING_DIM: usize = 384;

/// Turns text into a fixed-size vector. Implementations must be reentrant;
/// concurrent scoring calls share one instance through `Arc<dyn Embedder>`.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, AppError>;

    fn name(&self) -> &'static str;
}

/// Runs `embed` under the caller-supplied time budget. A timeout surfaces as
/// `ModelUnavailable`, never as a silent zero score.
pub async fn embed_with_timeout(
    embedder: &dyn Embedder,
    text: &str,
    budget: Duration,
) -> Result<Vec<f32>, AppError> {
    tokio::time::timeout(budget, embedder.embed(text))
        .await
        .map_err(|_| {
            AppError::ModelUnavailable(format!(
                "embedding timed out after {}s",
                budget.as_secs()
            ))
        })?
}

/// Cosine similarity scaled to a two-decimal percentage. In principle
/// [-100, 100]; natural-language pairs land in [0, 100].
pub fn semantic_score(a: &[f32], b: &[f32]) -> f64 {
    round2(cosine_similarity(a, b) * 100.0)
}

/// Cosine similarity of two vectors; 0.0 when either has zero norm
/// (e.g. an empty-text embedding from the hash backend).
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += f64::from(*x) * f64::from(*y);
        norm_a += f64::from(*x) * f64::from(*x);
        norm_b += f64::from(*y) * f64::from(*y);
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

// ────────────────────────────────────────────────────────────────────────────
// FastEmbedEmbedder
// ────────────────────────────────────────────────────────────────────────────

/// fastembed-backed embedder. Inference is CPU-bound, so calls run on the
/// blocking pool; the fastembed session itself is reentrant and shared.
pub struct FastEmbedEmbedder {
    model: Arc<TextEmbedding>,
}

impl FastEmbedEmbedder {
    pub fn try_new() -> Result<Self, AppError> {
        info!("Loading embedding model all-MiniLM-L6-v2...");
        let model = TextEmbedding::try_new(
            InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(false),
        )
        .map_err(|e| AppError::ModelUnavailable(e.to_string()))?;
        info!("Embedding model loaded ({EMBEDDING_DIM}-d)");
        Ok(Self {
            model: Arc::new(model),
        })
    }
}

#[async_trait]
impl Embedder for FastEmbedEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, AppError> {
        let model = Arc::clone(&self.model);
        let text = text.to_string();

        let mut vectors = tokio::task::spawn_blocking(move || {
            model
                .embed(vec![text], None)
                .map_err(|e| AppError::ModelUnavailable(e.to_string()))
        })
        .await
        .map_err(|e| AppError::ModelUnavailable(format!("embedding task failed: {e}")))??;

        vectors
            .pop()
            .ok_or_else(|| AppError::ModelUnavailable("backend returned no vector".to_string()))
    }

    fn name(&self) -> &'static str {
        "fastembed"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HashEmbedder
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic embedder: each token hashes into a signed bucket of a
/// fixed-size vector, L2-normalized. No semantics beyond token overlap, but
/// identical texts always embed identically, which is what the tests need.
pub struct HashEmbedder {
    dim: usize,
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self { dim: EMBEDDING_DIM }
    }
}

impl HashEmbedder {
    fn embed_sync(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; self.dim];
        for token in text.split_whitespace() {
            let mut hasher = DefaultHasher::new();
            token.hash(&mut hasher);
            let h = hasher.finish();
            let bucket = (h % self.dim as u64) as usize;
            let sign = if (h >> 32) & 1 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }
        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

#[async_trait]
impl Embedder for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, AppError> {
        Ok(self.embed_sync(text))
    }

    fn name(&self) -> &'static str {
        "hash"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vec![0.5_f32, -0.25, 1.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let a = vec![1.0_f32, 0.0];
        let b = vec![0.0_f32, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        let a = vec![0.0_f32; 4];
        let b = vec![1.0_f32; 4];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_semantic_score_identical_text_is_100() {
        let embedder = HashEmbedder::default();
        let v = embedder.embed_sync("python sql aws");
        assert_eq!(semantic_score(&v, &v), 100.0);
    }

    #[test]
    fn test_hash_embedder_deterministic() {
        let embedder = HashEmbedder::default();
        assert_eq!(
            embedder.embed_sync("looking for a python developer"),
            embedder.embed_sync("looking for a python developer")
        );
    }

    #[test]
    fn test_hash_embedder_dimensionality() {
        let embedder = HashEmbedder::default();
        assert_eq!(embedder.embed_sync("anything").len(), EMBEDDING_DIM);
        assert_eq!(embedder.embed_sync("").len(), EMBEDDING_DIM);
    }

    #[test]
    fn test_empty_text_scores_zero_not_error() {
        let embedder = HashEmbedder::default();
        let empty = embedder.embed_sync("");
        let jd = embedder.embed_sync("python developer");
        assert_eq!(semantic_score(&jd, &empty), 0.0);
    }

    #[tokio::test]
    async fn test_embed_with_timeout_passes_through() {
        let embedder = HashEmbedder::default();
        let v = embed_with_timeout(&embedder, "python", Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(v.len(), EMBEDDING_DIM);
    }

    #[tokio::test]
    async fn test_embed_timeout_is_model_unavailable() {
        struct SlowEmbedder;

        #[async_trait]
        impl Embedder for SlowEmbedder {
            async fn embed(&self, _text: &str) -> Result<Vec<f32>, AppError> {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(vec![])
            }
            fn name(&self) -> &'static str {
                "slow"
            }
        }

        let err = embed_with_timeout(&SlowEmbedder, "text", Duration::from_millis(10))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ModelUnavailable(_)));
    }
}
