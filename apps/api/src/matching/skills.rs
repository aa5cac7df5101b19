use std::collections::BTreeSet;

/// A set of normalized skill tokens. `BTreeSet` keeps equality and iteration
/// deterministic; a skill is its lowercased, trimmed form, so "Python" and
/// " python " are the same skill.
pub type SkillSet = BTreeSet<String>;

/// Skills recognized when a recruiter supplies no explicit requirement list;
/// also used to populate a candidate's `found_skills`.
const BUILTIN_VOCABULARY: &[&str] = &[
    "python",
    "sql",
    "excel",
    "aws",
    "docker",
    "pandas",
    "numpy",
    "machine learning",
    "streamlit",
    "postgres",
    "supabase",
    "java",
    "react",
    "power bi",
    "tableau",
];

pub fn builtin_vocabulary() -> SkillSet {
    BUILTIN_VOCABULARY.iter().map(|s| s.to_string()).collect()
}

/// Normalizes one raw skill entry. Empty or whitespace-only entries are
/// dropped, never rejected.
pub fn normalize_skill(raw: &str) -> Option<String> {
    let skill = raw.trim().to_lowercase();
    if skill.is_empty() {
        None
    } else {
        Some(skill)
    }
}

/// Parses a comma-separated free-text skill list ("Python, SQL,,  aws ").
/// Malformed entries are trimmed or dropped silently.
pub fn parse_skill_list(raw: &str) -> SkillSet {
    raw.split(',').filter_map(normalize_skill).collect()
}

/// Returns the subset of `vocabulary` occurring as a substring of `text`.
///
/// `text` must already be normalized (lowercased). Matching is substring
/// containment, not word match: "java" matches inside "javascript", and
/// multi-word skills like "power bi" rely on the same rule.
pub fn extract_skills(text: &str, vocabulary: &SkillSet) -> SkillSet {
    vocabulary
        .iter()
        .filter(|skill| text.contains(skill.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(skills: &[&str]) -> SkillSet {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_skill_list_trims_and_drops_empties() {
        let skills = parse_skill_list("Python, SQL,,  aws ,  ");
        assert_eq!(skills, set(&["python", "sql", "aws"]));
    }

    #[test]
    fn test_parse_skill_list_dedupes_case_insensitively() {
        let skills = parse_skill_list("Python, python, PYTHON");
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn test_extract_finds_substring_matches() {
        let found = extract_skills(
            "senior python engineer, 5 years, strong sql skills",
            &set(&["python", "sql", "aws"]),
        );
        assert_eq!(found, set(&["python", "sql"]));
    }

    #[test]
    fn test_substring_policy_java_matches_javascript() {
        let found = extract_skills("javascript developer", &set(&["java"]));
        assert_eq!(found, set(&["java"]));
    }

    #[test]
    fn test_multi_word_skill_matches() {
        let found = extract_skills("built power bi dashboards", &set(&["power bi"]));
        assert_eq!(found, set(&["power bi"]));
    }

    #[test]
    fn test_empty_vocabulary_yields_empty_result() {
        let found = extract_skills("python and sql everywhere", &SkillSet::new());
        assert!(found.is_empty());
    }

    #[test]
    fn test_extraction_monotonic_in_vocabulary() {
        let text = "python, sql and docker in production";
        let small = set(&["python", "sql"]);
        let mut large = small.clone();
        large.extend(set(&["docker", "aws"]));

        let from_small = extract_skills(text, &small);
        let from_large = extract_skills(text, &large);
        assert!(from_small.is_subset(&from_large));
    }
}
