// CONTEXT SEARCH ENGINE - exact keyword matching over a line matrix
//
// A pure, single-pass scan: no state survives a call, nothing is mutated.
// Matching is exact string equality after normalization; output rows are
// always the original token sequences, never the normalized forms.

use serde::Serialize;

use crate::line_matrix::LineMatrix;

/// Punctuation deleted from both sides of a comparison before matching.
/// Deleted, not replaced: "can't" and "cant" normalize identically.
pub const BAD_SYMBOLS: &str = "!@.,/#$%:;'?()-";

/// How far the context window reaches on each side of a matched row.
pub const CONTEXT_REACH: isize = 2;

/// The rows surrounding one keyword match, clipped at document boundaries.
///
/// At most `2 * CONTEXT_REACH + 1` rows, in matrix order; offsets that fall
/// on a sentinel are omitted, never padded.
#[derive(Debug, Clone, Serialize)]
pub struct ContextWindow {
    /// Display name of the source document.
    pub document: String,
    /// Absolute matrix index of the matched row.
    pub matched_row: usize,
    /// Rows at offsets -2..=+2 from the match, boundary-clipped.
    pub rows: Vec<Vec<String>>,
}

/// Lower-case `token`, then delete every bad symbol from it.
///
/// Applied identically to the keyword (once) and to every candidate token at
/// scan time. A token consisting only of bad symbols normalizes to the empty
/// string. Idempotent.
pub fn normalize(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|c| !BAD_SYMBOLS.contains(*c))
        .collect()
}

/// Scan `matrix` for exact (normalized) occurrences of `keyword` and emit
/// one context window per match, in strict matrix order.
///
/// Multiple matches on the same row each get their own full window, and
/// overlapping windows from closely spaced matches are never merged or
/// deduplicated; downstream consumers rely on that shape. An absent keyword
/// yields an empty vec, not an error.
pub fn search(matrix: &LineMatrix, keyword: &str) -> Vec<ContextWindow> {
    let needle = normalize(keyword);
    let mut windows = Vec::new();

    for (i, tokens) in matrix.content_rows() {
        for token in tokens {
            if normalize(token) != needle {
                continue;
            }
            let mut rows = Vec::new();
            for offset in -CONTEXT_REACH..=CONTEXT_REACH {
                if let Some(row) = matrix.row(i as isize + offset) {
                    rows.push(row.to_vec());
                }
            }
            debug_assert!(!rows.is_empty(), "match row {i} fell outside the matrix");
            windows.push(ContextWindow {
                document: matrix.document().to_string(),
                matched_row: i,
                rows,
            });
        }
    }

    windows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocFormat;

    fn matrix(lines: &[&str]) -> LineMatrix {
        LineMatrix::build("poem.txt".into(), DocFormat::PlainText, &lines.join("\n"))
    }

    fn poem() -> LineMatrix {
        matrix(&[
            "The autumn wind",
            "blows cold",
            "every single night",
            "in my quiet room",
            "while I sleep",
        ])
    }

    #[test]
    fn test_normalize_lowercases_and_strips() {
        assert_eq!(normalize("Wind,"), "wind");
        assert_eq!(normalize("can't"), "cant");
        assert_eq!(normalize("HELLO!"), "hello");
        assert_eq!(normalize("(#$%)"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for word in ["Wind,", "can't", "plain", "a-b-c"] {
            let once = normalize(word);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_match_on_second_row_clips_leading_offset() {
        // "blows cold" is the second content row: offset -2 lands on the
        // leading sentinel and is skipped, leaving 4 rows
        let hits = search(&poem(), "cold");
        assert_eq!(hits.len(), 1);
        let w = &hits[0];
        assert_eq!(w.matched_row, 2);
        assert_eq!(w.rows.len(), 4);
        // Original casing and token content retained
        assert_eq!(w.rows[0], ["The", "autumn", "wind"]);
        assert_eq!(w.rows[1], ["blows", "cold"]);
        assert_eq!(w.rows[3], ["in", "my", "quiet", "room"]);
    }

    #[test]
    fn test_interior_match_gets_five_rows() {
        let m = matrix(&[
            "line one",
            "line two",
            "line three",
            "the target word",
            "line five",
            "line six",
            "line seven",
        ]);
        let hits = search(&m, "target");
        assert_eq!(hits.len(), 1);
        let w = &hits[0];
        assert_eq!(w.matched_row, 4);
        assert_eq!(w.rows.len(), 5);
        assert_eq!(w.rows[0], ["line", "two"]);
        assert_eq!(w.rows[2], ["the", "target", "word"]);
        assert_eq!(w.rows[4], ["line", "six"]);
    }

    #[test]
    fn test_match_on_first_row_clips_to_three() {
        let hits = search(&poem(), "Autumn");
        assert_eq!(hits.len(), 1);
        let w = &hits[0];
        assert_eq!(w.matched_row, 1);
        assert_eq!(w.rows.len(), 3);
        assert_eq!(w.rows[0], ["The", "autumn", "wind"]);
        assert_eq!(w.rows[2], ["every", "single", "night"]);
    }

    #[test]
    fn test_match_on_last_row_clips_to_three() {
        let hits = search(&poem(), "sleep");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].rows.len(), 3);
        assert_eq!(hits[0].rows[2], ["while", "I", "sleep"]);
    }

    #[test]
    fn test_single_line_document_window_is_one_row() {
        let m = matrix(&["lonely line"]);
        let hits = search(&m, "lonely");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].rows, vec![vec!["lonely".to_string(), "line".to_string()]]);
    }

    #[test]
    fn test_absent_keyword_yields_empty_result() {
        assert!(search(&poem(), "winter").is_empty());
    }

    #[test]
    fn test_trailing_punctuation_stripped_from_tokens() {
        let m = matrix(&["the wind, it howls"]);
        let hits = search(&m, "wind");
        assert_eq!(hits.len(), 1);
        // Emitted token keeps its comma
        assert_eq!(hits[0].rows[0][1], "wind,");
    }

    #[test]
    fn test_no_substring_matching() {
        let m = matrix(&["windmill spins"]);
        assert!(search(&m, "wind").is_empty());
    }

    #[test]
    fn test_repeated_token_on_one_row_emits_two_windows() {
        let m = matrix(&["first line", "echo echo here", "last line"]);
        let hits = search(&m, "echo");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].matched_row, hits[1].matched_row);
        assert_eq!(hits[0].rows, hits[1].rows);
    }

    #[test]
    fn test_adjacent_matches_keep_overlapping_windows() {
        let m = matrix(&["spark one", "spark two", "filler", "filler again"]);
        let hits = search(&m, "spark");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].rows.len(), 3); // rows 1..=3
        assert_eq!(hits[1].rows.len(), 4); // rows 1..=4, overlap kept as-is
    }

    #[test]
    fn test_multi_word_keyword_never_matches() {
        // Comparison is token-for-token; a keyword with a space cannot match
        let m = matrix(&["blows cold tonight"]);
        assert!(search(&m, "blows cold").is_empty());
    }

    #[test]
    fn test_scan_order_is_matrix_order() {
        let m = matrix(&["b a", "x", "a b"]);
        let hits = search(&m, "a");
        assert_eq!(hits.len(), 2);
        assert!(hits[0].matched_row < hits[1].matched_row);
    }

    #[test]
    fn test_equivalent_extractor_output_matches_identically() {
        let a = LineMatrix::build("a.txt".into(), DocFormat::PlainText, "one two\nthree four");
        let b = LineMatrix::build("b.pdf".into(), DocFormat::Pdf, "one two\nthree four");
        let ha = search(&a, "three");
        let hb = search(&b, "three");
        assert_eq!(ha.len(), hb.len());
        assert_eq!(ha[0].rows, hb[0].rows);
    }
}
