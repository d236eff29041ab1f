use std::path::Path;

use docjoin::{PipelineOptions, PipelineOutcome};

use crate::cli::{FormatArg, JoinModeArg, OutputFormat};
use crate::shared::{print_warnings, read_input};

#[allow(clippy::too_many_arguments)]
pub fn run(
    file_a: &Path,
    file_b: &Path,
    mode: &JoinModeArg,
    format: &OutputFormat,
    column_threshold: f64,
    text_threshold: f64,
    format_a: Option<&FormatArg>,
    format_b: Option<&FormatArg>,
) -> Result<(), i32> {
    let a = read_input(file_a, format_a.map(FormatArg::to_input_format))?;
    let b = read_input(file_b, format_b.map(FormatArg::to_input_format))?;

    let options = PipelineOptions {
        join_mode: mode.to_join_mode(),
        column_threshold,
        text_threshold,
    };
    let report = docjoin::run(&a, &b, &options);
    print_warnings(&report.warnings);

    match format {
        OutputFormat::Text => render_text(&report.outcome),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).map_err(|e| {
                eprintln!("Error serializing result: {e}");
                1
            })?;
            println!("{json}");
            Ok(())
        }
        OutputFormat::Csv => render_body(&report.outcome),
    }
}

fn render_text(outcome: &PipelineOutcome) -> Result<(), i32> {
    match outcome {
        PipelineOutcome::Joined(result) => {
            println!(
                "Joined {} row(s) on '{}' ~ '{}' ({} join)",
                result.row_count, result.join_column_a, result.join_column_b, result.mode
            );
            let csv = result.to_csv_string().map_err(|e| {
                eprintln!("Error rendering joined table: {e}");
                1
            })?;
            print!("{csv}");
            Ok(())
        }
        PipelineOutcome::NoJoinColumns {
            columns_a,
            columns_b,
        } => {
            println!("No matching columns found.");
            println!("  first:  {}", columns_a.join(", "));
            println!("  second: {}", columns_b.join(", "));
            Ok(())
        }
        PipelineOutcome::TextMatched(result) => {
            println!("{} common line(s):", result.count);
            println!("{}", result.to_text());
            Ok(())
        }
        PipelineOutcome::NoCommonText => {
            println!("No common text found.");
            Ok(())
        }
        PipelineOutcome::NoExtractableContent { kind_a, kind_b } => {
            println!("No extractable content (first: {kind_a}, second: {kind_b}).");
            Ok(())
        }
    }
}

/// Body-only output: the joined table as CSV, or matched lines as text.
/// Outcomes with no body report on stderr instead.
fn render_body(outcome: &PipelineOutcome) -> Result<(), i32> {
    match outcome {
        PipelineOutcome::Joined(result) => {
            let csv = result.to_csv_string().map_err(|e| {
                eprintln!("Error rendering joined table: {e}");
                1
            })?;
            print!("{csv}");
            Ok(())
        }
        PipelineOutcome::TextMatched(result) => {
            println!("{}", result.to_text());
            Ok(())
        }
        other => {
            eprintln!("no result body to write for this outcome: {other:?}");
            Err(2)
        }
    }
}
