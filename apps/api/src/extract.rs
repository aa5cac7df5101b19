use tracing::warn;

use crate::errors::AppError;

/// Narrow contract with the resume text extractor. The core never depends on
/// the file format; it sees raw text or a failure.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, AppError>;
}

/// pdf-extract backed extractor for uploaded resume bytes.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, AppError> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| AppError::Extraction(e.to_string()))
    }
}

/// Extraction failure is not fatal: the resume scores against empty text and
/// the candidate is flagged for manual review instead of crashing the batch.
pub fn extract_or_empty(
    extractor: &dyn TextExtractor,
    resume_name: &str,
    bytes: &[u8],
) -> (String, bool) {
    match extractor.extract(bytes) {
        Ok(text) => (text, false),
        Err(e) => {
            warn!("Extraction failed for '{resume_name}': {e}");
            (String::new(), true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingExtractor;

    impl TextExtractor for FailingExtractor {
        fn extract(&self, _bytes: &[u8]) -> Result<String, AppError> {
            Err(AppError::Extraction("unreadable file".to_string()))
        }
    }

    struct FixedExtractor(&'static str);

    impl TextExtractor for FixedExtractor {
        fn extract(&self, _bytes: &[u8]) -> Result<String, AppError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_failure_becomes_empty_text_with_flag() {
        let (text, failed) = extract_or_empty(&FailingExtractor, "broken.pdf", b"junk");
        assert_eq!(text, "");
        assert!(failed);
    }

    #[test]
    fn test_success_passes_text_through() {
        let (text, failed) = extract_or_empty(&FixedExtractor("python engineer"), "ok.pdf", b"");
        assert_eq!(text, "python engineer");
        assert!(!failed);
    }

    #[test]
    fn test_pdf_extractor_rejects_garbage_bytes() {
        let result = PdfTextExtractor.extract(b"not a pdf at all");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }
}
