use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Lowercases and collapses every whitespace run (spaces, tabs, newlines)
/// to a single space, trimming the ends. Total and idempotent; extractor
/// failures arrive here as the empty string and pass through unchanged.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Contact fields lifted from resume text on a best-effort basis.
/// Never validated by the core; a missed email is not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactFields {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub years_experience: i32,
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\w.-]+@[\w.-]+").expect("email regex"))
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\+91)?[6-9]\d{9}").expect("phone regex"))
}

fn experience_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\+?\s*years").expect("experience regex"))
}

/// Extracts email, phone and years-of-experience from normalized resume text.
/// Years default to 0 when no "<n> years" phrase is present.
pub fn extract_contact(text: &str) -> ContactFields {
    let email = email_re().find(text).map(|m| m.as_str().to_string());
    let phone = phone_re().find(text).map(|m| m.as_str().to_string());
    let years_experience = experience_re()
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .unwrap_or(0);

    ContactFields {
        email,
        phone,
        years_experience,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_collapses() {
        assert_eq!(
            normalize("  Senior\tPython\n\nEngineer  "),
            "senior python engineer"
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = ["", "  ", "Hello  World", "A\nB\tC", "already normal"];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_extract_email_and_phone() {
        let contact = extract_contact("reach me at jane.doe@example.com or 9876543210");
        assert_eq!(contact.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(contact.phone.as_deref(), Some("9876543210"));
    }

    #[test]
    fn test_extract_experience_years() {
        let contact = extract_contact("senior python engineer, 5 years, strong sql skills");
        assert_eq!(contact.years_experience, 5);
    }

    #[test]
    fn test_experience_defaults_to_zero() {
        let contact = extract_contact("fresh graduate, no phone listed");
        assert_eq!(contact.years_experience, 0);
        assert!(contact.email.is_none());
        assert!(contact.phone.is_none());
    }

    #[test]
    fn test_experience_plus_suffix() {
        let contact = extract_contact("10+ years of backend work");
        assert_eq!(contact.years_experience, 10);
    }
}
