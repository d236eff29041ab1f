//! Plain text extraction.

use docjoin_core::{ExtractWarning, ExtractedContent, LineSet};

use crate::decode::decode_text;

/// Split plain text into a deduplicated line set.
///
/// Lines are trimmed and empties dropped; deduplication keeps the first
/// occurrence, consistent with the page-based path.
pub(crate) fn extract_plaintext(
    bytes: &[u8],
    warnings: &mut Vec<ExtractWarning>,
) -> ExtractedContent {
    let text = decode_text(bytes, warnings);
    let lines = LineSet::from_text(&text);
    if lines.is_empty() {
        ExtractedContent::Empty
    } else {
        ExtractedContent::Lines(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_trimmed_and_deduplicated() {
        let mut warnings = Vec::new();
        let content = extract_plaintext(b"  alpha \nbeta\nalpha\n\n", &mut warnings);
        let ExtractedContent::Lines(lines) = content else {
            panic!("expected lines");
        };
        assert_eq!(lines.lines(), ["alpha", "beta"]);
    }

    #[test]
    fn whitespace_only_input_is_empty() {
        let mut warnings = Vec::new();
        let content = extract_plaintext(b"  \n\t\n", &mut warnings);
        assert_eq!(content, ExtractedContent::Empty);
    }

    #[test]
    fn legacy_encoded_text_still_extracts() {
        let mut warnings = Vec::new();
        let content = extract_plaintext(b"caf\xE9 au lait\n", &mut warnings);
        let ExtractedContent::Lines(lines) = content else {
            panic!("expected lines");
        };
        assert_eq!(lines.lines(), ["café au lait"]);
        assert_eq!(warnings.len(), 1);
    }
}
