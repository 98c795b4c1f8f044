use std::panic;

use super::ExtractError;

/// Extracts text from a PDF held in memory, page by page, via `pdf-extract`.
///
/// `pdf-extract` can panic on malformed font or encoding tables; such panics
/// are reported as `ExtractError::Pdf` so a bad upload never takes down a worker.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    if !has_pdf_header(bytes) {
        return Err(ExtractError::Pdf("missing %PDF- header".to_string()));
    }

    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractError::Pdf(e.to_string())),
        Err(_) => Err(ExtractError::Pdf(
            "PDF parser aborted on malformed input".to_string(),
        )),
    }
}

/// Returns true if the bytes start with the PDF magic header.
pub fn has_pdf_header(bytes: &[u8]) -> bool {
    bytes.starts_with(b"%PDF-")
}
