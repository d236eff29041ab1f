//! Delimited-text (CSV/TSV) extraction.

use csv::ReaderBuilder;
use docjoin_core::{ExtractWarning, ExtractWarningCode, ExtractedContent, StructuredTable};

use crate::decode::decode_text;

/// Parse delimited bytes into a structured table.
///
/// The first record supplies column names; every later record becomes a row.
/// Ragged records never fail the parse: short rows are padded, long rows
/// widen the table. A reader error anywhere yields `Empty`, never a partial
/// table.
pub(crate) fn extract_csv(
    bytes: &[u8],
    warnings: &mut Vec<ExtractWarning>,
) -> ExtractedContent {
    let text = decode_text(bytes, warnings);
    let delimiter = sniff_delimiter(&text);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut table: Option<StructuredTable> = None;
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(error) => {
                tracing::warn!(%error, "CSV parse failed; discarding partial table");
                warnings.push(ExtractWarning::new(
                    ExtractWarningCode::Other("csv parse failed".to_string()),
                    error.to_string(),
                ));
                return ExtractedContent::Empty;
            }
        };
        match table.as_mut() {
            None => {
                let columns = record
                    .iter()
                    .enumerate()
                    .map(|(i, name)| header_name(name, i))
                    .collect();
                table = Some(StructuredTable::new(columns));
            }
            Some(table) => {
                table.push_text_row(record.iter().map(str::to_string).collect());
            }
        }
    }

    match table {
        Some(table) => ExtractedContent::Table(table),
        None => {
            warnings.push(ExtractWarning::new(
                ExtractWarningCode::EmptyTable,
                "delimited input contained no records",
            ));
            ExtractedContent::Empty
        }
    }
}

/// Tab-delimited exports are common enough to deserve a look at the first
/// line: if it contains tabs but no commas, treat the input as TSV.
fn sniff_delimiter(text: &str) -> u8 {
    let first_line = text.lines().next().unwrap_or_default();
    if first_line.contains('\t') && !first_line.contains(',') {
        b'\t'
    } else {
        b','
    }
}

fn header_name(raw: &str, index: usize) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        format!("column_{}", index + 1)
    } else {
        trimmed.to_string()
    }
}
