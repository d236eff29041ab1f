//! Heuristic discovery of a join column pair across two tables.

use crate::similarity::ratio;
use crate::table::StructuredTable;

/// Default minimum similarity for a column pair to be considered; scores
/// must be strictly above this value.
pub const DEFAULT_COLUMN_THRESHOLD: f64 = 80.0;

/// A proposed join column pair with its similarity score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnMatch {
    /// Matched column name from the first table.
    pub column_a: String,
    /// Matched column name from the second table.
    pub column_b: String,
    /// Positional index of `column_a` in the first table.
    pub index_a: usize,
    /// Positional index of `column_b` in the second table.
    pub index_b: usize,
    /// Case-insensitive similarity score in [0, 100].
    pub score: f64,
}

/// Propose the best column pair to join `a` and `b` on.
///
/// Scores every ordered pair of column names with a case-insensitive
/// edit-distance ratio. Pairs scoring strictly above `threshold` are
/// candidates; the highest-scoring candidate wins, ties going to the
/// earliest pair in (outer `a`, inner `b`) iteration order.
///
/// Returns `None` when no pair clears the threshold, a normal outcome
/// rather than an error.
pub fn match_columns(
    a: &StructuredTable,
    b: &StructuredTable,
    threshold: f64,
) -> Option<ColumnMatch> {
    let mut best: Option<ColumnMatch> = None;

    for (index_a, column_a) in a.columns().iter().enumerate() {
        let lower_a = column_a.to_lowercase();
        for (index_b, column_b) in b.columns().iter().enumerate() {
            let score = ratio(&lower_a, &column_b.to_lowercase());
            if score <= threshold {
                continue;
            }
            // Strict comparison keeps the earliest pair on ties.
            if best.as_ref().is_none_or(|m| score > m.score) {
                best = Some(ColumnMatch {
                    column_a: column_a.clone(),
                    column_b: column_b.clone(),
                    index_a,
                    index_b,
                    score,
                });
            }
        }
    }

    best
}
