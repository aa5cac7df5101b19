//! Per-upload scoring orchestration.
//!
//! All job-side inputs travel in a caller-held `MatchContext` — required
//! skills and the JD embedding in force at upload time. Core operations never
//! read ambient session state, so the pipeline is testable without the HTTP
//! layer, and a later skill edit cannot silently change what a score meant.

use std::time::Duration;

use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::report::{match_resume, MatchReport};
use crate::matching::scoring::FusionWeights;
use crate::matching::semantic::{embed_with_timeout, semantic_score, Embedder};
use crate::matching::skills::{builtin_vocabulary, extract_skills, SkillSet};
use crate::matching::text::{extract_contact, normalize, ContactFields};

/// Job-side context for scoring one resume, built once per job and reused
/// across every candidate comparison (the JD embedding is never recomputed
/// per resume).
#[derive(Debug, Clone)]
pub struct MatchContext {
    pub job_id: Uuid,
    pub required_skills: SkillSet,
    pub jd_embedding: Vec<f32>,
}

/// Everything the pipeline produces for one resume, ready to be attached to
/// a candidate record.
#[derive(Debug, Clone)]
pub struct ScoredResume {
    pub report: MatchReport,
    /// Skills from the built-in vocabulary found in the resume, independent
    /// of what the job requires.
    pub found_skills: SkillSet,
    pub contact: ContactFields,
    /// True when extraction failed or the text normalized to empty; the
    /// scores exist but are flagged for manual review.
    pub needs_review: bool,
}

/// Scores one resume against the job context. The resume is embedded exactly
/// once; `ModelUnavailable` from the embedder fails this resume only, the
/// caller keeps processing the rest of its batch.
pub async fn score_resume(
    ctx: &MatchContext,
    embedder: &dyn Embedder,
    embed_budget: Duration,
    raw_text: &str,
    extraction_failed: bool,
) -> Result<ScoredResume, AppError> {
    let text = normalize(raw_text);
    let needs_review = extraction_failed || text.is_empty();

    let resume_embedding = embed_with_timeout(embedder, &text, embed_budget).await?;
    let semantic = semantic_score(&ctx.jd_embedding, &resume_embedding);

    let report = match_resume(&text, &ctx.required_skills, semantic, &FusionWeights::default());
    let found_skills = extract_skills(&text, &builtin_vocabulary());
    let contact = extract_contact(&text);

    Ok(ScoredResume {
        report,
        found_skills,
        contact,
        needs_review,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::semantic::HashEmbedder;
    use crate::matching::skills::parse_skill_list;

    const BUDGET: Duration = Duration::from_secs(5);

    async fn context_for(jd_text: &str, skills: &str) -> MatchContext {
        let embedder = HashEmbedder::default();
        let jd_embedding = embedder.embed(&normalize(jd_text)).await.unwrap();
        MatchContext {
            job_id: Uuid::new_v4(),
            required_skills: parse_skill_list(skills),
            jd_embedding,
        }
    }

    #[tokio::test]
    async fn test_scores_matched_and_missing_skills() {
        let ctx = context_for(
            "Looking for a Python developer with SQL and AWS experience",
            "python, sql, aws",
        )
        .await;
        let embedder = HashEmbedder::default();

        let scored = score_resume(
            &ctx,
            &embedder,
            BUDGET,
            "Senior Python engineer, 5 years, strong SQL skills",
            false,
        )
        .await
        .unwrap();

        let matched: Vec<&str> = scored.report.matched.iter().map(|s| s.as_str()).collect();
        assert_eq!(matched, vec!["python", "sql"]);
        let missing: Vec<&str> = scored.report.missing.iter().map(|s| s.as_str()).collect();
        assert_eq!(missing, vec!["aws"]);
        assert_eq!(scored.report.skill_score, 66.67);
        assert_eq!(scored.contact.years_experience, 5);
        assert!(!scored.needs_review);
    }

    #[tokio::test]
    async fn test_empty_resume_is_scored_but_flagged() {
        let ctx = context_for("Python developer wanted", "python").await;
        let embedder = HashEmbedder::default();

        let scored = score_resume(&ctx, &embedder, BUDGET, "", false)
            .await
            .unwrap();

        assert!(scored.needs_review);
        assert_eq!(scored.report.semantic_score, 0.0);
        assert_eq!(scored.report.skill_score, 0.0);
        assert_eq!(scored.report.final_score, 0.0);
    }

    #[tokio::test]
    async fn test_extraction_failure_flag_propagates() {
        let ctx = context_for("Python developer wanted", "python").await;
        let embedder = HashEmbedder::default();

        let scored = score_resume(&ctx, &embedder, BUDGET, "python engineer", true)
            .await
            .unwrap();

        assert!(scored.needs_review);
        // Scoring still ran on whatever text was available.
        assert_eq!(scored.report.skill_score, 100.0);
    }

    #[tokio::test]
    async fn test_found_skills_use_builtin_vocabulary() {
        let ctx = context_for("Anything", "").await;
        let embedder = HashEmbedder::default();

        let scored = score_resume(
            &ctx,
            &embedder,
            BUDGET,
            "Docker, Postgres and Tableau in production",
            false,
        )
        .await
        .unwrap();

        assert!(scored.found_skills.contains("docker"));
        assert!(scored.found_skills.contains("postgres"));
        assert!(scored.found_skills.contains("tableau"));
        // Empty requirement set: skill signal is zero by policy.
        assert_eq!(scored.report.skill_score, 0.0);
    }
}
