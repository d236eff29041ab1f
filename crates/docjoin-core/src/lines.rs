//! Ordered, deduplicated text lines extracted from a document.

use std::collections::HashSet;

/// An ordered sequence of distinct, non-empty, trimmed text lines.
///
/// Lines are kept in document order; duplicates keep their first occurrence.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSet {
    lines: Vec<String>,
}

impl LineSet {
    /// Create an empty line set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a line set from a text blob, splitting on line breaks.
    pub fn from_text(text: &str) -> Self {
        let mut set = Self::new();
        set.extend_from_text(text);
        set
    }

    /// Append lines from a text blob, trimming, dropping empties, and
    /// skipping lines already present.
    pub fn extend_from_text(&mut self, text: &str) {
        let mut seen: HashSet<String> = self.lines.iter().cloned().collect();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || seen.contains(line) {
                continue;
            }
            seen.insert(line.to_string());
            self.lines.push(line.to_string());
        }
    }

    /// The lines, in first-occurrence order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if no lines were collected.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join the lines with newlines.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_trims_and_drops_empties() {
        let set = LineSet::from_text("  alpha  \n\n beta\n   \n");
        assert_eq!(set.lines(), ["alpha", "beta"]);
    }

    #[test]
    fn deduplicates_preserving_first_occurrence() {
        let set = LineSet::from_text("a\nb\na\nc\nb");
        assert_eq!(set.lines(), ["a", "b", "c"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn extend_skips_lines_already_present() {
        let mut set = LineSet::from_text("one\ntwo");
        set.extend_from_text("two\nthree");
        assert_eq!(set.lines(), ["one", "two", "three"]);
    }

    #[test]
    fn empty_input_yields_empty_set() {
        let set = LineSet::from_text("");
        assert!(set.is_empty());
        assert_eq!(set.to_text(), "");
    }

    #[test]
    fn to_text_joins_with_newlines() {
        let set = LineSet::from_text("x\ny");
        assert_eq!(set.to_text(), "x\ny");
    }
}
