//! Text extraction from uploaded documents.
//!
//! PDF goes through `pdf-extract`; DOCX through `docx-rs`. Only embedded
//! text is captured — no OCR. Extraction is a pure transform over the
//! provided bytes and holds no file handles.

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use crate::errors::AppError;
use crate::models::document::{Document, DocumentFormat, ExtractedText};

/// Converts a document into plain text, or fails with `Extraction` when
/// the content is corrupt or unreadable.
pub fn extract(document: &Document) -> Result<ExtractedText, AppError> {
    let extracted = match document.format {
        DocumentFormat::Pdf => extract_pdf(&document.content),
        DocumentFormat::Docx => extract_docx(&document.content),
    }?;
    // No OCR: a scanned or genuinely empty document yields no text at
    // all, and the downstream checks have nothing to work with.
    if extracted.is_blank() {
        return Err(AppError::Extraction(
            "document contains no extractable text".to_string(),
        ));
    }
    Ok(extracted)
}

/// `pdf-extract` already walks pages in order and joins their text, so
/// the whole output is one unit. No line-break normalization beyond
/// what each page yields.
fn extract_pdf(bytes: &[u8]) -> Result<ExtractedText, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Extraction(format!("unreadable PDF: {e}")))?;
    Ok(ExtractedText::new(vec![text]))
}

/// One unit per paragraph, in document order. Empty paragraphs are kept
/// as empty units: they become blank lines, which can be structurally
/// meaningful (section separators).
fn extract_docx(bytes: &[u8]) -> Result<ExtractedText, AppError> {
    let docx =
        read_docx(bytes).map_err(|e| AppError::Extraction(format!("unreadable DOCX: {e:?}")))?;

    let mut units = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            units.push(paragraph_text(paragraph));
        }
    }
    Ok(ExtractedText::new(units))
}

/// Paragraph → Run → Text is the path through the docx-rs tree. Runs
/// within a paragraph concatenate with no separator; they are parts of
/// the same sentence.
fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut parts = Vec::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(text) = run_child {
                    parts.push(text.text.clone());
                }
            }
        }
    }
    parts.join("")
}
