//! PDF text extraction for uploaded résumés.
//!
//! No OCR and no layout preservation; a scanned PDF with zero extractable
//! pages yields an empty string, not an error.

use crate::errors::AppError;

/// PDF files start with the `%PDF` marker.
pub fn is_pdf(data: &[u8]) -> bool {
    data.starts_with(b"%PDF")
}

/// Extracts the text of every page that produces any text, joined with
/// newlines in page order. Pages with no extractable text are skipped.
pub fn extract_resume_text(data: &[u8]) -> Result<String, AppError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(data)
        .map_err(|e| AppError::Pdf(format!("Failed to extract text from PDF: {e}")))?;
    Ok(join_pages(&pages))
}

fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .filter(|page| !page.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}
