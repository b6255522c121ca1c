use thiserror::Error;

/// Analysis-level error type.
///
/// Only document parsing is allowed to fail visibly. Skill-list loading
/// falls back to the built-in vocabulary and similarity vectorization
/// degrades to a zero score, so neither surfaces here (see
/// `matching::skills` and `matching::similarity`).
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Failed to parse PDF document: {0}")]
    PdfParse(#[from] pdf_extract::OutputError),

    #[error("Failed to parse DOCX document: {0}")]
    DocxParse(#[from] docx_rs::ReaderError),

    #[error("Unsupported document format: {0}")]
    UnsupportedMime(String),
}
