//! docjoin-core: Backend-independent data model and matching algorithms.
//!
//! This crate provides the foundational types (StructuredTable, LineSet,
//! ExtractedContent) and algorithms (fuzzy column matching, relational joins,
//! token-set text matching) used by docjoin. It knows nothing about file
//! formats; extraction backends live in `docjoin-extract`.

mod columns;
mod content;
mod error;
mod join;
mod lines;
mod render;
mod similarity;
mod table;
mod textmatch;

pub use columns::{ColumnMatch, DEFAULT_COLUMN_THRESHOLD, match_columns};
pub use content::{ContentKind, ExtractOutput, ExtractedContent};
pub use error::{ExtractWarning, ExtractWarningCode, RenderError};
pub use join::{JoinMode, JoinResult, join};
pub use lines::LineSet;
pub use render::table_to_csv_string;
pub use similarity::{ratio, token_set_ratio};
pub use table::StructuredTable;
pub use textmatch::{DEFAULT_TEXT_THRESHOLD, MatchResult, match_lines};
