//! Spreadsheet (xlsx/xls/ods) extraction via calamine.

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use docjoin_core::{ExtractWarning, ExtractWarningCode, ExtractedContent, StructuredTable};

/// Parse a workbook into a structured table.
///
/// The first sheet with a non-empty range is used; its first row supplies
/// column names. A sheet that fails to read is skipped with a warning and
/// the next sheet is tried. Workbook-level failure yields `Empty`.
pub(crate) fn extract_spreadsheet(
    bytes: &[u8],
    warnings: &mut Vec<ExtractWarning>,
) -> ExtractedContent {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook = match open_workbook_auto_from_rs(cursor) {
        Ok(workbook) => workbook,
        Err(error) => {
            tracing::warn!(%error, "failed to open workbook");
            warnings.push(ExtractWarning::new(
                ExtractWarningCode::Other("workbook open failed".to_string()),
                error.to_string(),
            ));
            return ExtractedContent::Empty;
        }
    };

    let sheet_names = workbook.sheet_names().to_vec();
    for name in sheet_names {
        let range = match workbook.worksheet_range(&name) {
            Ok(range) => range,
            Err(error) => {
                tracing::warn!(sheet = %name, %error, "skipping unreadable sheet");
                warnings.push(
                    ExtractWarning::new(ExtractWarningCode::SheetFailed, error.to_string())
                        .on_sheet(name.clone()),
                );
                continue;
            }
        };

        let mut rows = range.rows();
        let Some(header) = rows.next() else {
            continue;
        };

        let columns = header
            .iter()
            .enumerate()
            .map(|(i, cell)| header_name(cell, i))
            .collect();
        let mut table = StructuredTable::new(columns);
        for row in rows {
            table.push_row(row.iter().map(data_to_cell).collect());
        }
        return ExtractedContent::Table(table);
    }

    warnings.push(ExtractWarning::new(
        ExtractWarningCode::EmptyTable,
        "workbook contained no sheet with data",
    ));
    ExtractedContent::Empty
}

/// Render one spreadsheet cell as an optional string.
///
/// Whole-number floats are printed without a trailing `.0` so keys line up
/// with their CSV counterparts.
fn data_to_cell(data: &Data) -> Option<String> {
    match data {
        Data::Empty => None,
        Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.is_finite() && f.abs() < 1e15 {
                Some(format!("{}", *f as i64))
            } else {
                Some(f.to_string())
            }
        }
        other => Some(other.to_string()),
    }
}

fn header_name(cell: &Data, index: usize) -> String {
    match data_to_cell(cell) {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => format!("column_{}", index + 1),
    }
}
