//! Table detection in extracted page text.
//!
//! PDF text extraction yields lines, not geometry, so tables are recovered
//! heuristically: a line splits into cells on tabs or runs of two or more
//! spaces, and two or more consecutive multi-cell lines form a table block.

/// Minimum cells per line for it to count as a table row.
pub(crate) const MIN_TABLE_COLS: usize = 2;

/// Minimum consecutive rows for a block to count as a table.
const MIN_TABLE_ROWS: usize = 2;

/// Split a line into cells on tabs or runs of two or more spaces.
///
/// Single spaces are preserved inside a cell ("New  York  NY 10001" has
/// three cells, the last containing a space).
pub(crate) fn split_cells(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    for tab_part in line.trim().split('\t') {
        let mut rest = tab_part.trim();
        while !rest.is_empty() {
            match rest.find("  ") {
                Some(pos) => {
                    let (head, tail) = rest.split_at(pos);
                    if !head.trim().is_empty() {
                        cells.push(head.trim().to_string());
                    }
                    rest = tail.trim_start();
                }
                None => {
                    cells.push(rest.to_string());
                    rest = "";
                }
            }
        }
    }
    cells
}

/// Split on any whitespace. Used as a fallback for tables whose extracted
/// text collapsed column gaps to single spaces.
pub(crate) fn soft_split_cells(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Detect table blocks in one page's text.
///
/// Returns blocks of rows; each block has at least [`MIN_TABLE_ROWS`] rows
/// and every row at least [`MIN_TABLE_COLS`] cells, padded to the block's
/// widest row.
pub(crate) fn detect_table_blocks(text: &str) -> Vec<Vec<Vec<String>>> {
    let mut blocks = Vec::new();
    let mut current: Vec<Vec<String>> = Vec::new();

    for line in text.lines() {
        match table_row_cells(line) {
            Some(cells) => current.push(cells),
            None => flush_block(&mut current, &mut blocks),
        }
    }
    flush_block(&mut current, &mut blocks);
    blocks
}

/// Interpret a line as a table row, or `None` if it reads as prose.
fn table_row_cells(line: &str) -> Option<Vec<String>> {
    let cells = split_cells(line);
    if cells.len() >= MIN_TABLE_COLS {
        return Some(cells);
    }

    // Fallback: single-space separated columns, accepted only when the line
    // does not look like a sentence and is either numeric-ish or short.
    // Requires one column more than the hard split so two-word prose lines
    // stay prose.
    let soft = soft_split_cells(line);
    if soft.len() <= MIN_TABLE_COLS {
        return None;
    }
    let sentence_like = line
        .trim_end()
        .ends_with(['.', '!', '?']);
    let has_digit = soft
        .iter()
        .any(|cell| cell.chars().any(|ch| ch.is_ascii_digit()));
    if !sentence_like && (has_digit || soft.len() <= 6) {
        Some(soft)
    } else {
        None
    }
}

fn flush_block(current: &mut Vec<Vec<String>>, blocks: &mut Vec<Vec<Vec<String>>>) {
    if current.len() >= MIN_TABLE_ROWS {
        let width = current.iter().map(Vec::len).max().unwrap_or(0);
        for row in current.iter_mut() {
            row.resize(width, String::new());
        }
        blocks.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_double_spaces() {
        assert_eq!(split_cells("Alice  30  98"), ["Alice", "30", "98"]);
    }

    #[test]
    fn splits_on_tabs() {
        assert_eq!(split_cells("A\tB\tC"), ["A", "B", "C"]);
    }

    #[test]
    fn preserves_single_spaces_inside_cells() {
        assert_eq!(
            split_cells("New York  NY  10001"),
            ["New York", "NY", "10001"]
        );
    }

    #[test]
    fn soft_split_on_single_spaces() {
        assert_eq!(soft_split_cells("Name Age Score"), ["Name", "Age", "Score"]);
    }

    #[test]
    fn detects_consecutive_multi_cell_lines() {
        let text = "Report header\nID  Name\n1  Alice\n2  Bob\n\nFooter text here ends.";
        let blocks = detect_table_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].len(), 3);
        assert_eq!(blocks[0][0], ["ID", "Name"]);
    }

    #[test]
    fn single_multi_cell_line_is_not_a_table() {
        let blocks = detect_table_blocks("just prose\nID  Name\nmore prose");
        assert!(blocks.is_empty());
    }

    #[test]
    fn rows_are_padded_to_block_width() {
        let blocks = detect_table_blocks("a  b  c\n1  2\n");
        assert_eq!(blocks[0][1], ["1", "2", ""]);
    }

    #[test]
    fn sentence_lines_are_not_soft_split() {
        let blocks =
            detect_table_blocks("This line is a normal sentence.\nAnd so is this other one.");
        assert!(blocks.is_empty());
    }

    #[test]
    fn numeric_single_space_rows_are_accepted() {
        let text = "item 1 9.99\nitem 2 4.50";
        let blocks = detect_table_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0][0], ["item", "1", "9.99"]);
    }

    #[test]
    fn separate_blocks_for_interrupted_tables() {
        let text = "a  b\n1  2\n\nprose paragraph explains things in detail.\n\nc  d\n3  4";
        let blocks = detect_table_blocks(text);
        assert_eq!(blocks.len(), 2);
    }
}
