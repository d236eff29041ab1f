use std::path::Path;

use docjoin::{ExtractedContent, table_to_csv_string};

use crate::cli::{FormatArg, OutputFormat};
use crate::shared::{print_warnings, read_input};

pub fn run(
    file: &Path,
    format: &OutputFormat,
    input_format: Option<&FormatArg>,
) -> Result<(), i32> {
    let input = read_input(file, input_format.map(FormatArg::to_input_format))?;
    let output = docjoin::extract(&input);
    print_warnings(&output.warnings);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&output).map_err(|e| {
                eprintln!("Error serializing result: {e}");
                1
            })?;
            println!("{json}");
            Ok(())
        }
        OutputFormat::Text => match &output.content {
            ExtractedContent::Table(table) => {
                println!(
                    "table: {} column(s), {} row(s)",
                    table.width(),
                    table.len()
                );
                let csv = table_to_csv_string(table).map_err(|e| {
                    eprintln!("Error rendering table: {e}");
                    1
                })?;
                print!("{csv}");
                Ok(())
            }
            ExtractedContent::Lines(lines) => {
                println!("lines: {}", lines.len());
                println!("{}", lines.to_text());
                Ok(())
            }
            ExtractedContent::Empty => {
                println!("no extractable content");
                Ok(())
            }
        },
        OutputFormat::Csv => match &output.content {
            ExtractedContent::Table(table) => {
                let csv = table_to_csv_string(table).map_err(|e| {
                    eprintln!("Error rendering table: {e}");
                    1
                })?;
                print!("{csv}");
                Ok(())
            }
            ExtractedContent::Lines(lines) => {
                println!("{}", lines.to_text());
                Ok(())
            }
            ExtractedContent::Empty => {
                eprintln!("no result body to write: input had no extractable content");
                Err(2)
            }
        },
    }
}
