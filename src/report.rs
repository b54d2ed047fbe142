// Report rendering: the legacy plain-text dump plus a JSON alternative.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::search::ContextWindow;

/// The results of one issued search: one keyword against one document.
/// Groups arrive in issued order, documents outer, keywords inner.
#[derive(Debug, Serialize)]
pub struct KeywordResults {
    pub keyword: String,
    pub windows: Vec<ContextWindow>,
}

/// Legacy text shape: for each window the document name on its own line,
/// each window row on its own line with tokens joined by single spaces, and
/// a blank separator line between windows.
pub fn write_text(out: &mut dyn Write, results: &[KeywordResults]) -> Result<()> {
    for group in results {
        for window in &group.windows {
            writeln!(out, "{}", window.document)?;
            for row in &window.rows {
                writeln!(out, "{}", row.join(" "))?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn write_json(out: &mut dyn Write, results: &[KeywordResults]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)?;
    Ok(())
}
