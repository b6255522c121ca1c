//! PDF text extraction.
//!
//! Thin wrapper over the `pdf-extract` crate, page-aware so that pages
//! with no extractable text drop out instead of contributing blank lines.

use tracing::debug;

use crate::errors::AnalyzerError;

/// Extracts text from a PDF held fully in memory.
///
/// Pages are extracted independently and joined with newlines in page
/// order. A page with no detectable text contributes nothing; an
/// undecodable byte stream is an error.
pub fn extract_text_from_pdf(bytes: &[u8]) -> Result<String, AnalyzerError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)?;
    let page_count = pages.len();

    let non_empty: Vec<String> = pages
        .into_iter()
        .filter(|page| !page.trim().is_empty())
        .collect();

    debug!(
        pages = page_count,
        pages_with_text = non_empty.len(),
        "Extracted PDF text"
    );

    Ok(non_empty.join("\n"))
}
