// LINE MATRIX - normalized, sentinel-bounded view of one document's text
//
// Every extractor feeds its raw text through here so that the search engine
// only ever sees one shape: an ordered sequence of tokenized rows with one
// out-of-bounds sentinel row at each end. The sentinels participate in the
// -2..+2 window arithmetic but are never emitted as content; emission is
// guarded by an index-bounds check, not by comparing against a marker value.

use crate::types::DocFormat;

/// One document's text as ordered rows of raw (non-normalized) word tokens.
///
/// Built once per parse, immutable afterwards. Row 0 and row `len - 1` are
/// the sentinel rows; everything in between is content in original line
/// order.
#[derive(Debug, Clone)]
pub struct LineMatrix {
    document: String,
    rows: Vec<Vec<String>>,
}

impl LineMatrix {
    /// Build the matrix from one extractor's raw text block.
    ///
    /// Plain-text sources may carry formatting artifacts the other
    /// extractors do not, so for `DocFormat::PlainText` each raw line is
    /// first stripped of stray tab characters at its ends and of a single
    /// trailing line terminator. Empty and whitespace-only lines are dropped
    /// before the sentinels are inserted.
    pub fn build(document: String, format: DocFormat, text: &str) -> Self {
        let mut rows: Vec<Vec<String>> = Vec::new();
        // Sentinel row: out of file, before the first content line
        rows.push(Vec::new());

        for raw_line in text.split('\n') {
            let line = if format == DocFormat::PlainText {
                raw_line
                    .strip_suffix('\r')
                    .unwrap_or(raw_line)
                    .trim_matches('\t')
            } else {
                raw_line.strip_suffix('\r').unwrap_or(raw_line)
            };
            if line.trim().is_empty() {
                continue;
            }
            // Split on single spaces: consecutive spaces yield empty tokens,
            // kept on purpose so token positions line up with the source
            rows.push(line.split(' ').map(str::to_string).collect());
        }

        // Sentinel row: out of file, after the last content line
        rows.push(Vec::new());

        LineMatrix { document, rows }
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    /// Total row count, sentinels included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Content row count (without the two sentinels).
    pub fn content_len(&self) -> usize {
        self.rows.len() - 2
    }

    pub fn is_empty(&self) -> bool {
        self.content_len() == 0
    }

    /// The tokens of the row at `index`, or `None` if the index falls on a
    /// sentinel or outside the matrix entirely. This is the only way rows
    /// leave the matrix, which keeps sentinels out of every result.
    pub fn row(&self, index: isize) -> Option<&[String]> {
        if index < 1 || index as usize >= self.rows.len() - 1 {
            return None;
        }
        Some(&self.rows[index as usize])
    }

    /// Iterate content rows with their absolute matrix index (sentinels are
    /// skipped; their token lists are empty and could never match anyway).
    pub fn content_rows(&self) -> impl Iterator<Item = (usize, &[String])> + '_ {
        self.rows[..self.rows.len() - 1]
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, row)| (i, row.as_slice()))
    }
}
