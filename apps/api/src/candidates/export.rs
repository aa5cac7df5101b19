use crate::errors::AppError;
use crate::matching::rank::shortlisted;
use crate::models::candidate::CandidateRow;

/// Serializes the shortlist to CSV: one `resume_name,final_score` row per
/// candidate with a final score at or above the threshold, in ranked order.
/// A pure projection over stored rows.
pub fn shortlist_csv(rows: Vec<CandidateRow>) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["resume_name", "final_score"])
        .map_err(|e| AppError::Internal(e.into()))?;

    for row in shortlisted(rows) {
        let score = format!("{:.2}", row.final_score);
        writer
            .write_record([row.resume_name.as_str(), score.as_str()])
            .map_err(|e| AppError::Internal(e.into()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(e.into()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Internal(e.into()))
}
