//! Delimited-text rendering of structured tables.

use csv::WriterBuilder;

use crate::error::RenderError;
use crate::table::StructuredTable;

/// Serialize a table to comma-delimited text: header row first, one record
/// per row, RFC 4180 quoting. Null cells render as empty fields.
///
/// The encoding is lossless enough to round-trip: re-parsing the output as
/// CSV yields an equivalent table (null cells come back as empty strings).
pub fn table_to_csv_string(table: &StructuredTable) -> Result<String, RenderError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::<u8>::new());

    writer
        .write_record(table.columns())
        .map_err(|e| RenderError::Csv(e.to_string()))?;
    for row in table.rows() {
        let record = row.iter().map(|cell| cell.as_deref().unwrap_or(""));
        writer
            .write_record(record)
            .map_err(|e| RenderError::Csv(e.to_string()))?;
    }
    writer.flush().map_err(|e| RenderError::Csv(e.to_string()))?;

    let bytes = writer
        .into_inner()
        .map_err(|e| RenderError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| RenderError::InvalidUtf8(e.to_string()))
}
