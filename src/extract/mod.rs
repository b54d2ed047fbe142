// Text extraction: one extractor per recognized document family.
//
// Format selection is keyed purely on the file extension; the extractor for
// an unrecognized extension is never even looked up. Extractors return the
// whole document as one text block with embedded line breaks, and the line
// matrix builder applies the per-format quirks afterwards.

pub mod docx;
pub mod pdf;
pub mod txt;

use std::path::Path;

use crate::line_matrix::LineMatrix;
use crate::types::{display_name, DocFormat, Result, ScanError};

/// Extractor-internal failure, before the document identifier is attached.
#[derive(Debug)]
pub(crate) enum ExtractError {
    /// The document's own policy metadata forbids text extraction (PDF).
    Denied,
    /// I/O or decode failure; the reason ends up in `ScanError`.
    Failed(String),
}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::Failed(err.to_string())
    }
}

/// Parse one document into its line matrix.
///
/// Dispatches on extension, runs the matching extractor, and feeds the raw
/// text through the matrix builder. All failures carry the document's
/// display name so the caller can report per document instead of aborting
/// the batch. No partial matrix is ever produced.
pub fn parse_document(path: &Path) -> Result<LineMatrix> {
    let format = DocFormat::from_path(path)?;
    let document = display_name(path);

    let text = match format {
        DocFormat::PlainText => txt::extract(path),
        DocFormat::WordDocument => docx::extract(path),
        DocFormat::Pdf => pdf::extract(path),
    }
    .map_err(|err| match err {
        ExtractError::Denied => ScanError::AccessDenied {
            document: document.clone(),
            format,
        },
        ExtractError::Failed(reason) => ScanError::ExtractionFailed {
            document: document.clone(),
            format,
            reason,
        },
    })?;

    Ok(LineMatrix::build(document, format, &text))
}
