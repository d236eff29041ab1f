//! docjoin: Join or fuzzy-match the contents of two documents.
//!
//! Give [`run`] two raw inputs (PDF, CSV, spreadsheet, or plain text) and it
//! extracts what each contains, then either joins their tables on a
//! heuristically matched column pair or fuzzy-matches their common text
//! lines. Every failure mode resolves to a reportable [`PipelineOutcome`];
//! nothing here aborts the hosting process.
//!
//! # Example
//!
//! ```
//! use docjoin::{InputFormat, PipelineOptions, PipelineOutcome, RawInput, run};
//!
//! let a = RawInput::new(b"ID,Name\n1,Alice\n2,Bob\n".to_vec(), InputFormat::Csv);
//! let b = RawInput::new(b"id,Score\n1,90\n3,70\n".to_vec(), InputFormat::Csv);
//! let report = run(&a, &b, &PipelineOptions::default());
//! match report.outcome {
//!     PipelineOutcome::Joined(result) => assert_eq!(result.row_count, 1),
//!     other => panic!("expected a join, got {other:?}"),
//! }
//! ```

mod pipeline;

pub use docjoin_core::{
    ColumnMatch, ContentKind, DEFAULT_COLUMN_THRESHOLD, DEFAULT_TEXT_THRESHOLD, ExtractOutput,
    ExtractWarning, ExtractWarningCode, ExtractedContent, JoinMode, JoinResult, LineSet,
    MatchResult, RenderError, StructuredTable, join, match_columns, match_lines, ratio,
    table_to_csv_string, token_set_ratio,
};
pub use docjoin_extract::{ExtractError, InputFormat, RawInput, extract};
pub use pipeline::{PipelineOptions, PipelineOutcome, PipelineRun, run};
