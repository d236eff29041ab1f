//! Relational joins over structured tables.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::columns::ColumnMatch;
use crate::error::RenderError;
use crate::render::table_to_csv_string;
use crate::table::StructuredTable;

/// Relational join variant, determining which unmatched rows are retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum JoinMode {
    /// Keep only rows with matching keys on both sides.
    #[default]
    Inner,
    /// Keep all left rows, filling unmatched right columns with null.
    Left,
    /// Keep all right rows, filling unmatched left columns with null.
    Right,
    /// Keep all rows from both sides.
    Outer,
}

impl JoinMode {
    /// Returns the lowercase name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinMode::Inner => "inner",
            JoinMode::Left => "left",
            JoinMode::Right => "right",
            JoinMode::Outer => "outer",
        }
    }
}

impl fmt::Display for JoinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of joining two tables, with join metadata.
///
/// An empty row set is a valid, signaled result: "the join produced zero
/// rows" is distinct from "the join could not be attempted".
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JoinResult {
    /// The joined table.
    pub table: StructuredTable,
    /// Join column name from the first table.
    pub join_column_a: String,
    /// Join column name from the second table.
    pub join_column_b: String,
    /// The join mode that was applied.
    pub mode: JoinMode,
    /// Number of rows in the joined table.
    pub row_count: usize,
}

impl JoinResult {
    /// Serialize the joined table to comma-delimited text with a header row.
    pub fn to_csv_string(&self) -> Result<String, RenderError> {
        table_to_csv_string(&self.table)
    }
}

/// Compute the relational join of `a` and `b` on the matched column pair.
///
/// Key comparison is exact on cell values; fuzziness is resolved once, at
/// column-selection time. Null keys never match. Multiple matches per key
/// produce the cross product of matching rows.
///
/// Output columns are `a`'s followed by `b`'s; names occurring on both sides
/// are disambiguated with `_x` (left) and `_y` (right) suffixes.
pub fn join(
    a: &StructuredTable,
    b: &StructuredTable,
    pair: &ColumnMatch,
    mode: JoinMode,
) -> JoinResult {
    let mut table = StructuredTable::new(output_columns(a, b));

    match mode {
        JoinMode::Inner | JoinMode::Left => {
            let b_keys = key_map(b, pair.index_b);
            for row in a.rows() {
                append_matches(
                    &mut table,
                    row,
                    pair.index_a,
                    b,
                    &b_keys,
                    mode == JoinMode::Left,
                    Side::Left,
                );
            }
        }
        JoinMode::Right => {
            let a_keys = key_map(a, pair.index_a);
            for row in b.rows() {
                append_matches(&mut table, row, pair.index_b, a, &a_keys, true, Side::Right);
            }
        }
        JoinMode::Outer => {
            let b_keys = key_map(b, pair.index_b);
            let mut matched_b: HashSet<usize> = HashSet::new();
            for row in a.rows() {
                let matches = row[pair.index_a]
                    .as_deref()
                    .and_then(|key| b_keys.get(key));
                match matches {
                    Some(indices) => {
                        for &j in indices {
                            matched_b.insert(j);
                            table.push_row(combine(row, &b.rows()[j]));
                        }
                    }
                    None => table.push_row(combine(row, &vec![None; b.width()])),
                }
            }
            for (j, row) in b.rows().iter().enumerate() {
                if !matched_b.contains(&j) {
                    table.push_row(combine(&vec![None; a.width()], row));
                }
            }
        }
    }

    let row_count = table.len();
    JoinResult {
        table,
        join_column_a: pair.column_a.clone(),
        join_column_b: pair.column_b.clone(),
        mode,
        row_count,
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Side {
    Left,
    Right,
}

fn append_matches(
    table: &mut StructuredTable,
    row: &[Option<String>],
    key_index: usize,
    other: &StructuredTable,
    other_keys: &HashMap<String, Vec<usize>>,
    keep_unmatched: bool,
    side: Side,
) {
    let matches = row[key_index].as_deref().and_then(|key| other_keys.get(key));
    match matches {
        Some(indices) => {
            for &j in indices {
                let combined = match side {
                    Side::Left => combine(row, &other.rows()[j]),
                    Side::Right => combine(&other.rows()[j], row),
                };
                table.push_row(combined);
            }
        }
        None if keep_unmatched => {
            let nulls = vec![None; other.width()];
            let combined = match side {
                Side::Left => combine(row, &nulls),
                Side::Right => combine(&nulls, row),
            };
            table.push_row(combined);
        }
        None => {}
    }
}

/// Map from key value to the row indices holding it. Null cells are skipped.
fn key_map(table: &StructuredTable, column: usize) -> HashMap<String, Vec<usize>> {
    let mut map: HashMap<String, Vec<usize>> = HashMap::new();
    for (index, row) in table.rows().iter().enumerate() {
        if let Some(key) = row[column].as_deref() {
            map.entry(key.to_string()).or_default().push(index);
        }
    }
    map
}

fn combine(left: &[Option<String>], right: &[Option<String>]) -> Vec<Option<String>> {
    left.iter().chain(right.iter()).cloned().collect()
}

/// Left columns then right columns, suffixing names that occur on both sides.
fn output_columns(a: &StructuredTable, b: &StructuredTable) -> Vec<String> {
    let a_names: HashSet<&String> = a.columns().iter().collect();
    let b_names: HashSet<&String> = b.columns().iter().collect();

    let mut columns = Vec::with_capacity(a.width() + b.width());
    for name in a.columns() {
        if b_names.contains(name) {
            columns.push(format!("{name}_x"));
        } else {
            columns.push(name.clone());
        }
    }
    for name in b.columns() {
        if a_names.contains(name) {
            columns.push(format!("{name}_y"));
        } else {
            columns.push(name.clone());
        }
    }
    columns
}
