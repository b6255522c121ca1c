// Extractors for the supported resume document formats.

pub mod docx;
pub mod pdf;

use crate::errors::AnalyzerError;
use crate::models::DocumentFormat;

/// Extracts plain text from raw document bytes for a known format.
///
/// The returned text has no structure beyond newline separation between
/// extracted pages/paragraphs.
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<String, AnalyzerError> {
    match format {
        DocumentFormat::Pdf => pdf::extract_text_from_pdf(bytes),
        DocumentFormat::Docx => docx::extract_text_from_docx(bytes),
    }
}

/// MIME-tagged variant for callers holding an upload's declared
/// content type.
pub fn extract_text_for_mime(bytes: &[u8], mime: &str) -> Result<String, AnalyzerError> {
    let format = DocumentFormat::from_mime(mime)
        .ok_or_else(|| AnalyzerError::UnsupportedMime(mime.to_string()))?;
    extract_text(bytes, format)
}
