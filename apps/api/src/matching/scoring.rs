use serde::{Deserialize, Serialize};

/// Final score at or above this value puts a candidate on the shortlist.
pub const SHORTLIST_THRESHOLD: f64 = 70.0;

/// Rounds to two decimal places; all percentages in the pipeline carry
/// exactly this precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fraction of required skills found in the resume, as a percentage.
///
/// An empty requirement set scores 0, not 100: "no requirements" is treated
/// as no match signal, so jobs with no declared skills never get their fused
/// score inflated.
pub fn skill_score(matched: usize, required: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }
    round2(matched as f64 / required as f64 * 100.0)
}

/// Fusion weights for combining the semantic and skill percentages.
/// Policy constants in the base design; callers needing tunability pass
/// their own instance instead of mutating a global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusionWeights {
    pub semantic: f64,
    pub skill: f64,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            semantic: 0.7,
            skill: 0.3,
        }
    }
}

/// Weighted fusion of the two percentages: 0.7*semantic + 0.3*skill by default.
pub fn fuse(semantic: f64, skill: f64, weights: &FusionWeights) -> f64 {
    round2(weights.semantic * semantic + weights.skill * skill)
}

pub fn is_shortlisted(final_score: f64) -> bool {
    final_score >= SHORTLIST_THRESHOLD
}
