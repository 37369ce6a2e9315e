//! PDF text extraction.

use super::ExtractError;

/// Pulls plain text out of an in-memory PDF. Layout is discarded; page
/// breaks come through as newlines for the normalizer to clean up.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractError::Malformed(format!("pdf: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_malformed() {
        let err = extract_text(b"not a pdf at all").unwrap_err();
        assert!(matches!(err, ExtractError::Malformed(_)));
    }
}
