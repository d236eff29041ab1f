//! docjoin-extract: Format-aware content extraction.
//!
//! Turns raw input bytes into [`ExtractedContent`] (a structured table, a
//! set of text lines, or nothing), dispatching on the declared/sniffed
//! [`InputFormat`]. Per-page and per-sheet failures degrade to warnings and
//! never abort extraction of the remaining units.

mod decode;
mod delimited;
mod error;
mod format;
mod pdf;
mod plaintext;
mod spreadsheet;
mod text_table;

use docjoin_core::ExtractOutput;

pub use error::ExtractError;
pub use format::{InputFormat, RawInput};

/// Extract content from one input.
///
/// Dispatches on the input's format tag only; no content inspection beyond
/// what sniffing already did. A parse failure yields
/// [`ExtractedContent::Empty`](docjoin_core::ExtractedContent::Empty) with
/// warnings attached, never a partial table.
pub fn extract(input: &RawInput) -> ExtractOutput {
    let mut warnings = Vec::new();
    let content = match input.format() {
        InputFormat::Csv => delimited::extract_csv(input.bytes(), &mut warnings),
        InputFormat::Spreadsheet => spreadsheet::extract_spreadsheet(input.bytes(), &mut warnings),
        InputFormat::Pdf => pdf::extract_pdf(input.bytes(), &mut warnings),
        InputFormat::PlainText => plaintext::extract_plaintext(input.bytes(), &mut warnings),
    };
    tracing::debug!(
        format = input.format().as_str(),
        kind = content.kind().as_str(),
        warnings = warnings.len(),
        "extraction finished"
    );
    ExtractOutput::with_warnings(content, warnings)
}
