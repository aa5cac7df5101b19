//! The matching/scoring core: text normalization, skill extraction, semantic
//! similarity, weighted score fusion, and the ranking/dedup policy.
//!
//! Everything here is pure (or takes explicit collaborators) and testable
//! without the HTTP layer or a database.

pub mod pipeline;
pub mod rank;
pub mod report;
pub mod scoring;
pub mod semantic;
pub mod skills;
pub mod text;
