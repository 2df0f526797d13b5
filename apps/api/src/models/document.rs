#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The two document formats the extractor understands. Anything else is
/// rejected at the boundary with `UnsupportedFormat`, so the pipeline
/// never carries an unknown format tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Infers the format from a client-supplied filename extension.
    pub fn from_filename(filename: &str) -> Result<Self, AppError> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("pdf") => Ok(DocumentFormat::Pdf),
            Some("docx") => Ok(DocumentFormat::Docx),
            _ => Err(AppError::UnsupportedFormat(format!(
                "'{filename}' is not a .pdf or .docx file"
            ))),
        }
    }
}

/// A raw uploaded document: opaque bytes plus a declared format tag.
/// Immutable once read; owned by a single analysis request.
#[derive(Debug, Clone)]
pub struct Document {
    pub content: Vec<u8>,
    pub format: DocumentFormat,
}

impl Document {
    pub fn new(content: Vec<u8>, format: DocumentFormat) -> Self {
        Self { content, format }
    }
}

/// Text pulled out of a document, one unit per source paragraph (DOCX)
/// or per extraction run (PDF). Units concatenate into a single string
/// with paragraph breaks preserved as newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    units: Vec<String>,
}

impl ExtractedText {
    pub fn new(units: Vec<String>) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &[String] {
        &self.units
    }

    /// Joins all units into one string, paragraph breaks as `\n`.
    pub fn into_text(self) -> String {
        self.units.join("\n")
    }

    /// True when no unit contains any visible text.
    pub fn is_blank(&self) -> bool {
        self.units.iter().all(|u| u.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_pdf_filename() {
        assert_eq!(
            DocumentFormat::from_filename("resume.pdf").unwrap(),
            DocumentFormat::Pdf
        );
    }

    #[test]
    fn test_format_from_docx_filename() {
        assert_eq!(
            DocumentFormat::from_filename("resume.docx").unwrap(),
            DocumentFormat::Docx
        );
    }

    #[test]
    fn test_format_extension_is_case_insensitive() {
        assert_eq!(
            DocumentFormat::from_filename("Resume.PDF").unwrap(),
            DocumentFormat::Pdf
        );
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let err = DocumentFormat::from_filename("resume.txt").unwrap_err();
        assert!(matches!(err, crate::errors::AppError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        let err = DocumentFormat::from_filename("resume").unwrap_err();
        assert!(matches!(err, crate::errors::AppError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_units_join_with_newlines() {
        let text = ExtractedText::new(vec![
            "John Doe".to_string(),
            String::new(),
            "Experience".to_string(),
        ]);
        assert_eq!(text.into_text(), "John Doe\n\nExperience");
    }

    #[test]
    fn test_blank_detection() {
        assert!(ExtractedText::new(vec![String::new(), "  ".to_string()]).is_blank());
        assert!(!ExtractedText::new(vec!["x".to_string()]).is_blank());
    }
}
