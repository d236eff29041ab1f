//! The pipeline coordinator: extract both inputs, pick a mode, match.

use docjoin_core::{
    ContentKind, DEFAULT_COLUMN_THRESHOLD, DEFAULT_TEXT_THRESHOLD, ExtractWarning,
    ExtractedContent, JoinMode, JoinResult, MatchResult, join, match_columns, match_lines,
};
use docjoin_extract::{RawInput, extract};

/// Knobs for one pipeline run.
///
/// The two thresholds are independent: column-name matching and line
/// matching use different similarity metrics and different defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOptions {
    /// Relational join variant applied when both inputs are tabular.
    pub join_mode: JoinMode,
    /// Minimum column-name similarity, exclusive (default 80).
    pub column_threshold: f64,
    /// Minimum line similarity, inclusive (default 85).
    pub text_threshold: f64,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            join_mode: JoinMode::default(),
            column_threshold: DEFAULT_COLUMN_THRESHOLD,
            text_threshold: DEFAULT_TEXT_THRESHOLD,
        }
    }
}

/// What one pipeline run concluded.
///
/// Every variant is a normal, reportable result, including the ones that
/// found nothing to join or match.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "outcome", content = "detail", rename_all = "snake_case")
)]
pub enum PipelineOutcome {
    /// Both inputs were tabular and a join column pair was found.
    Joined(JoinResult),
    /// Both inputs were tabular but no column pair cleared the threshold.
    /// Both column lists are surfaced for manual inspection.
    NoJoinColumns {
        /// Column names of the first table.
        columns_a: Vec<String>,
        /// Column names of the second table.
        columns_b: Vec<String>,
    },
    /// Both inputs were textual and at least one line matched.
    TextMatched(MatchResult),
    /// Both inputs were textual but nothing matched.
    NoCommonText,
    /// The inputs could not enter either mode: one or both were empty, or
    /// one was tabular and the other textual (an explicit mismatch, never
    /// silently coerced).
    NoExtractableContent {
        /// Shape extracted from the first input.
        kind_a: ContentKind,
        /// Shape extracted from the second input.
        kind_b: ContentKind,
    },
}

/// A pipeline outcome plus the extraction warnings gathered on the way.
///
/// Warnings from the first input precede the second's.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PipelineRun {
    /// The outcome to report.
    pub outcome: PipelineOutcome,
    /// Non-fatal extraction issues from both inputs.
    pub warnings: Vec<ExtractWarning>,
}

/// Run the full pipeline over two inputs.
///
/// Extracts both (concurrently under the `parallel` feature; the two
/// extractions are pure computations over disjoint inputs), then decides:
/// two tables go to column matching and joining, two line sets go to text
/// matching, and anything else is reported as unextractable. Errors inside
/// one input's extraction never abort the other's.
pub fn run(a: &RawInput, b: &RawInput, options: &PipelineOptions) -> PipelineRun {
    let (output_a, output_b) = extract_both(a, b);

    let mut warnings = output_a.warnings;
    warnings.extend(output_b.warnings);

    let outcome = decide(output_a.content, output_b.content, options);
    tracing::debug!(warnings = warnings.len(), "pipeline finished");
    PipelineRun { outcome, warnings }
}

#[cfg(feature = "parallel")]
fn extract_both(
    a: &RawInput,
    b: &RawInput,
) -> (docjoin_core::ExtractOutput, docjoin_core::ExtractOutput) {
    rayon::join(|| extract(a), || extract(b))
}

#[cfg(not(feature = "parallel"))]
fn extract_both(
    a: &RawInput,
    b: &RawInput,
) -> (docjoin_core::ExtractOutput, docjoin_core::ExtractOutput) {
    (extract(a), extract(b))
}

fn decide(
    content_a: ExtractedContent,
    content_b: ExtractedContent,
    options: &PipelineOptions,
) -> PipelineOutcome {
    match (content_a, content_b) {
        (ExtractedContent::Table(table_a), ExtractedContent::Table(table_b)) => {
            match match_columns(&table_a, &table_b, options.column_threshold) {
                Some(pair) => {
                    tracing::info!(
                        column_a = %pair.column_a,
                        column_b = %pair.column_b,
                        score = pair.score,
                        mode = %options.join_mode,
                        "joining on matched columns"
                    );
                    let result: JoinResult = join(&table_a, &table_b, &pair, options.join_mode);
                    PipelineOutcome::Joined(result)
                }
                None => PipelineOutcome::NoJoinColumns {
                    columns_a: table_a.columns().to_vec(),
                    columns_b: table_b.columns().to_vec(),
                },
            }
        }
        (ExtractedContent::Lines(lines_a), ExtractedContent::Lines(lines_b)) => {
            let result = match_lines(&lines_a, &lines_b, options.text_threshold);
            if result.is_empty() {
                PipelineOutcome::NoCommonText
            } else {
                PipelineOutcome::TextMatched(result)
            }
        }
        (content_a, content_b) => PipelineOutcome::NoExtractableContent {
            kind_a: content_a.kind(),
            kind_b: content_b.kind(),
        },
    }
}
