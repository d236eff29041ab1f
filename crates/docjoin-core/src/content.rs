//! Extraction result shapes consumed by the pipeline coordinator.

use crate::error::ExtractWarning;
use crate::lines::LineSet;
use crate::table::StructuredTable;

/// What extraction produced for one input: a table, text lines, or nothing.
///
/// A successfully parsed input yields exactly one of the content-bearing
/// variants, never both.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtractedContent {
    /// Tabular content with named columns.
    Table(StructuredTable),
    /// Line-based textual content.
    Lines(LineSet),
    /// Nothing extractable.
    Empty,
}

impl ExtractedContent {
    /// The shape of this content, without the payload.
    pub fn kind(&self) -> ContentKind {
        match self {
            ExtractedContent::Table(_) => ContentKind::Table,
            ExtractedContent::Lines(_) => ContentKind::Lines,
            ExtractedContent::Empty => ContentKind::Empty,
        }
    }
}

/// The shape of extracted content, used to report mode mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentKind {
    /// Tabular content.
    Table,
    /// Line-based text.
    Lines,
    /// No usable content.
    Empty,
}

impl ContentKind {
    /// Returns the lowercase display tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Table => "table",
            ContentKind::Lines => "lines",
            ContentKind::Empty => "empty",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extracted content paired with warnings collected along the way.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractOutput {
    /// The extracted content.
    pub content: ExtractedContent,
    /// Non-fatal issues encountered during extraction.
    pub warnings: Vec<ExtractWarning>,
}

impl ExtractOutput {
    /// Content with no warnings.
    pub fn clean(content: ExtractedContent) -> Self {
        Self {
            content,
            warnings: Vec::new(),
        }
    }

    /// Content with collected warnings.
    pub fn with_warnings(content: ExtractedContent, warnings: Vec<ExtractWarning>) -> Self {
        Self { content, warnings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let table = ExtractedContent::Table(StructuredTable::new(vec!["a".to_string()]));
        assert_eq!(table.kind(), ContentKind::Table);
        let lines = ExtractedContent::Lines(LineSet::from_text("x"));
        assert_eq!(lines.kind(), ContentKind::Lines);
        assert_eq!(ExtractedContent::Empty.kind(), ContentKind::Empty);
    }

    #[test]
    fn kind_display() {
        assert_eq!(ContentKind::Table.to_string(), "table");
        assert_eq!(ContentKind::Lines.to_string(), "lines");
        assert_eq!(ContentKind::Empty.to_string(), "empty");
    }

    #[test]
    fn clean_output_has_no_warnings() {
        let out = ExtractOutput::clean(ExtractedContent::Empty);
        assert!(out.warnings.is_empty());
    }
}
