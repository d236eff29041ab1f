//! Structured tabular data with named columns and positional rows.

/// A table with ordered, named columns and ordered rows of optional cells.
///
/// Column names are not required to be unique in source data; positional
/// indices are the true identity of a column. Every row always holds exactly
/// `columns().len()` cells; the constructors and appenders enforce this by
/// padding short rows with `None` and widening the table (with generated
/// `column_N` names) when a row arrives wider than the current header.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StructuredTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl StructuredTable {
    /// Create an empty table with the given column names.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Create a table from column names and pre-built rows.
    ///
    /// Rows are padded or the table widened so the cell-count invariant holds.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row);
        }
        table
    }

    /// The ordered column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The ordered rows. Each row has exactly `columns().len()` cells.
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Number of data rows (the header is not a row).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Index of the first column with the given name, if any.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell value at (row, column), if the row exists and the cell is set.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column)?.as_deref()
    }

    /// Append a row, padding with `None` or widening the table as needed.
    pub fn push_row(&mut self, mut cells: Vec<Option<String>>) {
        if cells.len() > self.columns.len() {
            self.widen_to(cells.len());
        }
        cells.resize(self.columns.len(), None);
        self.rows.push(cells);
    }

    /// Append a row of plain strings (every cell present).
    pub fn push_text_row(&mut self, cells: Vec<String>) {
        self.push_row(cells.into_iter().map(Some).collect());
    }

    /// Grow the table to at least `width` columns.
    ///
    /// New columns are named `column_N` (1-indexed position) and existing
    /// rows are padded with `None`.
    pub fn widen_to(&mut self, width: usize) {
        while self.columns.len() < width {
            self.columns.push(format!("column_{}", self.columns.len() + 1));
        }
        for row in &mut self.rows {
            row.resize(self.columns.len(), None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some((*v).to_string())).collect()
    }

    #[test]
    fn new_table_is_empty() {
        let table = StructuredTable::new(vec!["a".to_string(), "b".to_string()]);
        assert!(table.is_empty());
        assert_eq!(table.width(), 2);
        assert_eq!(table.columns(), ["a", "b"]);
    }

    #[test]
    fn push_row_pads_short_rows() {
        let mut table = StructuredTable::new(vec!["a".to_string(), "b".to_string()]);
        table.push_row(cells(&["1"]));
        assert_eq!(table.rows()[0], vec![Some("1".to_string()), None]);
    }

    #[test]
    fn push_row_widens_table_for_long_rows() {
        let mut table = StructuredTable::new(vec!["a".to_string()]);
        table.push_row(cells(&["1"]));
        table.push_row(cells(&["2", "3", "4"]));
        assert_eq!(table.columns(), ["a", "column_2", "column_3"]);
        // Earlier rows are padded to the new width.
        assert_eq!(table.rows()[0], vec![Some("1".to_string()), None, None]);
        assert_eq!(table.rows()[1].len(), 3);
    }

    #[test]
    fn column_index_returns_first_occurrence() {
        let table = StructuredTable::new(vec![
            "id".to_string(),
            "name".to_string(),
            "id".to_string(),
        ]);
        assert_eq!(table.column_index("id"), Some(0));
        assert_eq!(table.column_index("name"), Some(1));
        assert_eq!(table.column_index("missing"), None);
    }

    #[test]
    fn cell_access() {
        let mut table = StructuredTable::new(vec!["a".to_string(), "b".to_string()]);
        table.push_row(vec![Some("x".to_string()), None]);
        assert_eq!(table.cell(0, 0), Some("x"));
        assert_eq!(table.cell(0, 1), None);
        assert_eq!(table.cell(1, 0), None);
    }

    #[test]
    fn from_rows_enforces_invariant() {
        let table = StructuredTable::from_rows(
            vec!["a".to_string(), "b".to_string()],
            vec![cells(&["1", "2", "3"]), cells(&["4"])],
        );
        assert_eq!(table.width(), 3);
        for row in table.rows() {
            assert_eq!(row.len(), 3);
        }
    }

    #[test]
    fn push_text_row_marks_every_cell_present() {
        let mut table = StructuredTable::new(vec!["a".to_string()]);
        table.push_text_row(vec!["".to_string()]);
        // A present-but-blank field is a value, not a missing cell.
        assert_eq!(table.rows()[0], vec![Some(String::new())]);
    }
}
