use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported resume document formats, tagged by MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFormat {
    /// Portable Document Format (.pdf)
    Pdf,
    /// Microsoft Word document (.docx)
    Docx,
}

impl DocumentFormat {
    pub const PDF_MIME: &'static str = "application/pdf";
    pub const DOCX_MIME: &'static str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

    /// Maps an upload's declared MIME type to a supported format.
    /// Anything outside the two supported types is rejected.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            Self::PDF_MIME => Some(DocumentFormat::Pdf),
            Self::DOCX_MIME => Some(DocumentFormat::Docx),
            _ => None,
        }
    }

    /// The MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => Self::PDF_MIME,
            DocumentFormat::Docx => Self::DOCX_MIME,
        }
    }

    /// The file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => ".pdf",
            DocumentFormat::Docx => ".docx",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => write!(f, "PDF"),
            DocumentFormat::Docx => write!(f, "DOCX"),
        }
    }
}
