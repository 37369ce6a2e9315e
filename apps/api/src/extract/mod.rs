//! Document-to-text — turns an uploaded resume into normalized plain text.
//!
//! PDF via pdf-extract, DOCX via zip + quick-xml. Extraction either returns
//! promptly or fails fast on bad input; the scoring pipeline never sees raw
//! bytes, only the normalized text produced here.

mod docx;
mod pdf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to read document: {0}")]
    Malformed(String),
}

/// Declared format of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Resolves a format tag (`pdf`, `docx`) or a filename carrying one as
    /// its extension. An unknown tag is a hard stop for the request, not a
    /// recoverable default — nothing downstream may run on a guess.
    pub fn from_tag(tag: &str) -> Result<Self, ExtractError> {
        let ext = tag.rsplit('.').next().unwrap_or(tag);
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            other => Err(ExtractError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Pdf => write!(f, "pdf"),
            DocumentFormat::Docx => write!(f, "docx"),
        }
    }
}

/// Extracts and normalizes text from a document. A structurally valid but
/// content-free document yields an empty string, never an error.
pub fn document_to_text(bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractError> {
    let raw = match format {
        DocumentFormat::Pdf => pdf::extract_text(bytes)?,
        DocumentFormat::Docx => docx::extract_text(bytes)?,
    };
    Ok(normalize(&raw))
}

/// Lowercases the raw extraction and collapses structure: a page or
/// paragraph whose text is empty contributes nothing, not even a blank line.
pub fn normalize(raw: &str) -> String {
    raw.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_bare_tag() {
        assert_eq!(DocumentFormat::from_tag("pdf").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_tag("DOCX").unwrap(), DocumentFormat::Docx);
    }

    #[test]
    fn test_format_from_filename_extension() {
        assert_eq!(
            DocumentFormat::from_tag("Jane_Doe_Resume.pdf").unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_tag("resume.final.docx").unwrap(),
            DocumentFormat::Docx
        );
    }

    #[test]
    fn test_unknown_format_is_hard_error() {
        let err = DocumentFormat::from_tag("resume.txt").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(ref tag) if tag == "txt"));
    }

    #[test]
    fn test_extensionless_filename_is_unsupported() {
        assert!(DocumentFormat::from_tag("resume").is_err());
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("Education\nPROJECTS"), "education\nprojects");
    }

    #[test]
    fn test_normalize_drops_blank_lines() {
        let raw = "Summary\n\n   \nExperience\n";
        assert_eq!(normalize(raw), "summary\nexperience");
    }

    #[test]
    fn test_normalize_empty_input_yields_empty_string() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\n\n  \n"), "");
    }
}
