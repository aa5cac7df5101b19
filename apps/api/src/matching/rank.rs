use std::cmp::Ordering;

use crate::matching::scoring::is_shortlisted;
use crate::models::candidate::CandidateRow;

/// Ranks a job's stored candidates: final score descending, ties broken by
/// insertion order (`seq` ascending, first-scored-first).
///
/// A pure read-time sort — re-issuing the same request over the same stored
/// rows yields the same sequence, and nothing is mutated in the store.
pub fn ranked(mut rows: Vec<CandidateRow>) -> impl Iterator<Item = CandidateRow> {
    rows.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.seq.cmp(&b.seq))
    });
    rows.into_iter()
}

/// Ranked candidates at or above the shortlist threshold.
pub fn shortlisted(rows: Vec<CandidateRow>) -> impl Iterator<Item = CandidateRow> {
    ranked(rows).filter(|row| is_shortlisted(row.final_score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn candidate(name: &str, final_score: f64, seq: i64) -> CandidateRow {
        CandidateRow {
            id: Uuid::new_v4(),
            job_id: Uuid::nil(),
            recruiter_id: "r1".to_string(),
            resume_name: name.to_string(),
            email: None,
            phone: None,
            years_experience: 0,
            found_skills: vec![],
            matched_skills: vec![],
            missing_skills: vec![],
            semantic_score: final_score,
            skill_score: final_score,
            final_score,
            needs_review: false,
            seq,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_ranking_descending_with_insertion_tie_break() {
        let rows = vec![
            candidate("a.pdf", 80.0, 1),
            candidate("b.pdf", 95.0, 2),
            candidate("c.pdf", 95.0, 3),
            candidate("d.pdf", 60.0, 4),
        ];

        let names: Vec<String> = ranked(rows).map(|r| r.resume_name).collect();
        assert_eq!(names, vec!["b.pdf", "c.pdf", "a.pdf", "d.pdf"]);
    }

    #[test]
    fn test_ranking_is_restartable() {
        let rows = vec![
            candidate("a.pdf", 70.0, 1),
            candidate("b.pdf", 90.0, 2),
            candidate("c.pdf", 70.0, 3),
        ];

        let first: Vec<String> = ranked(rows.clone()).map(|r| r.resume_name).collect();
        let second: Vec<String> = ranked(rows).map(|r| r.resume_name).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_shortlist_filters_below_threshold() {
        let rows = vec![
            candidate("in.pdf", 70.0, 1),
            candidate("out.pdf", 69.99, 2),
            candidate("top.pdf", 88.5, 3),
        ];

        let names: Vec<String> = shortlisted(rows).map(|r| r.resume_name).collect();
        assert_eq!(names, vec!["top.pdf", "in.pdf"]);
    }

    #[test]
    fn test_empty_input_yields_empty_ranking() {
        assert_eq!(ranked(vec![]).count(), 0);
    }
}
