// Core types for kwscan
use std::fmt;
use std::path::Path;

/// The three recognized document families, keyed on file extension.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DocFormat {
    PlainText,
    WordDocument,
    Pdf,
}

impl DocFormat {
    /// Pick the format from the file name's trailing extension,
    /// case-insensitively. Anything else is rejected before an extractor
    /// is ever invoked.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Ok(DocFormat::PlainText),
            "docx" => Ok(DocFormat::WordDocument),
            "pdf" => Ok(DocFormat::Pdf),
            other => Err(ScanError::UnsupportedFormat {
                extension: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DocFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocFormat::PlainText => write!(f, "txt"),
            DocFormat::WordDocument => write!(f, "docx"),
            DocFormat::Pdf => write!(f, "pdf"),
        }
    }
}

/// Display name of a document: file name with the path stripped.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// Error types
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("unsupported file type \".{extension}\" (expected txt, docx or pdf)")]
    UnsupportedFormat { extension: String },

    #[error("{document}: text extraction not permitted by this {format} document")]
    AccessDenied { document: String, format: DocFormat },

    #[error("{document}: could not extract {format} text: {reason}")]
    ExtractionFailed {
        document: String,
        format: DocFormat,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;
