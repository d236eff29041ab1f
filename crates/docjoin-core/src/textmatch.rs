//! Fuzzy line-level matching between two line sets.

use crate::lines::LineSet;
use crate::similarity::token_set_ratio;

/// Default minimum token-set similarity for two lines to count as a match.
pub const DEFAULT_TEXT_THRESHOLD: f64 = 85.0;

/// Lines from the first input that matched some line in the second.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    /// Matched lines, deduplicated, in first-input order.
    pub lines: Vec<String>,
    /// Number of matched lines.
    pub count: usize,
}

impl MatchResult {
    /// Join the matched lines with newlines.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Returns true if no lines matched.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Find the lines of `a` considered equivalent to some line of `b`.
///
/// Each line of `a` is tested against the lines of `b` with a token-set
/// similarity robust to word reordering and partial overlap; the line is
/// retained as soon as any line of `b` scores at or above `threshold`.
/// Output preserves `a`'s order and deduplicates retained lines.
///
/// Worst case is O(|a| x |b|) similarity computations, the dominant cost
/// for large documents; no indexing is attempted.
pub fn match_lines(a: &LineSet, b: &LineSet, threshold: f64) -> MatchResult {
    let mut lines = Vec::new();
    for line_a in a.lines() {
        let hit = b
            .lines()
            .iter()
            .any(|line_b| token_set_ratio(line_a, line_b) >= threshold);
        if hit && !lines.contains(line_a) {
            lines.push(line_a.clone());
        }
    }
    let count = lines.len();
    MatchResult { lines, count }
}
