// Plain-text extractor: the file already is its own text.

use std::fs;
use std::path::Path;

use super::ExtractError;

/// Read the whole file as UTF-8. `read_to_string` closes the handle on
/// every exit path, including decode failure.
pub(crate) fn extract(path: &Path) -> Result<String, ExtractError> {
    Ok(fs::read_to_string(path)?)
}
