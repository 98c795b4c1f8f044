//! Text extraction from uploaded CV documents.
//!
//! `AppState` carries an `Arc<dyn TextExtractor>`; the default backend is
//! `DocumentExtractor`, which dispatches to the PDF or DOCX reader by format.

pub mod docx;
pub mod pdf;

use thiserror::Error;

use crate::models::document::{DocumentFormat, UploadedDocument};

/// Anything shorter than this (after trimming) is treated as a failed extraction.
pub const MIN_EXTRACTED_CHARS: usize = 50;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("Document contains too little text (fewer than {MIN_EXTRACTED_CHARS} characters)")]
    Empty,
}

/// Converts an uploaded document into plain text. Implementations must be
/// synchronous; callers run them on the blocking pool.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, document: &UploadedDocument) -> Result<String, ExtractError>;
}

/// Library-backed extractor for PDF and DOCX uploads.
pub struct DocumentExtractor;

impl TextExtractor for DocumentExtractor {
    fn extract(&self, document: &UploadedDocument) -> Result<String, ExtractError> {
        let text = match document.format {
            DocumentFormat::Pdf => pdf::extract_text(&document.bytes)?,
            DocumentFormat::Docx => docx::extract_text(&document.bytes)?,
        };
        ensure_meaningful(text)
    }
}

/// Rejects extractions that yield (almost) nothing, e.g. scanned PDFs without a text layer.
pub fn ensure_meaningful(text: String) -> Result<String, ExtractError> {
    if text.trim().chars().count() < MIN_EXTRACTED_CHARS {
        return Err(ExtractError::Empty);
    }
    Ok(text)
}
