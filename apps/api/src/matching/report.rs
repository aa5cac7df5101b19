use serde::{Deserialize, Serialize};

use crate::matching::scoring::{fuse, skill_score, FusionWeights};
use crate::matching::skills::{extract_skills, SkillSet};

/// The matched/missing skill sets and the three scores for one resume
/// against one job. Built once at scoring time, attached to the candidate
/// record, immutable thereafter. Never persisted as its own entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub matched: SkillSet,
    pub missing: SkillSet,
    pub semantic_score: f64,
    pub skill_score: f64,
    pub final_score: f64,
}

/// Matches normalized resume text against the job's required skills and
/// fuses the result with the already-computed semantic score.
pub fn match_resume(
    resume_text: &str,
    required: &SkillSet,
    semantic: f64,
    weights: &FusionWeights,
) -> MatchReport {
    let matched = extract_skills(resume_text, required);
    let missing: SkillSet = required.difference(&matched).cloned().collect();
    let skill = skill_score(matched.len(), required.len());

    MatchReport {
        matched,
        missing,
        semantic_score: semantic,
        skill_score: skill,
        final_score: fuse(semantic, skill, weights),
    }
}
