//! Approximate string similarity scores.
//!
//! Two metrics, both on a 0–100 scale: an edit-distance ratio for short
//! identifiers like column names, and a token-set ratio for free text lines
//! that tolerates word reordering and partial overlap.

use std::collections::BTreeSet;

/// Edit-distance similarity ratio in [0, 100].
///
/// 100 means identical strings; near 0 means completely dissimilar. The
/// metric is symmetric. Case is significant; callers wanting
/// case-insensitive comparison lowercase their inputs first.
pub fn ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// Token-set similarity ratio in [0, 100].
///
/// Tokenizes both strings into lowercase alphanumeric words and compares the
/// sorted intersection against each side's sorted full token set, taking the
/// best pairwise [`ratio`]. Reordered words and subset/superset overlaps
/// score high; two strings with no tokens in common score near 0. Strings
/// with no tokens at all score 0.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a = tokens(a);
    let tokens_b = tokens(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersection: Vec<&str> = tokens_a
        .intersection(&tokens_b)
        .map(String::as_str)
        .collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).map(String::as_str).collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).map(String::as_str).collect();

    let base = intersection.join(" ");
    let combined_a = join_nonempty(&base, &only_a.join(" "));
    let combined_b = join_nonempty(&base, &only_b.join(" "));

    ratio(&base, &combined_a)
        .max(ratio(&base, &combined_b))
        .max(ratio(&combined_a, &combined_b))
}

fn join_nonempty(base: &str, rest: &str) -> String {
    if base.is_empty() {
        rest.to_string()
    } else if rest.is_empty() {
        base.to_string()
    } else {
        format!("{base} {rest}")
    }
}

/// Lowercase alphanumeric tokens of a string, sorted and deduplicated.
fn tokens(s: &str) -> BTreeSet<String> {
    s.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
