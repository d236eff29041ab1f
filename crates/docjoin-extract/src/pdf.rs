//! PDF extraction: per-page table detection with a text-line fallback.

use docjoin_core::{
    ExtractWarning, ExtractWarningCode, ExtractedContent, LineSet, StructuredTable,
};
use lopdf::Document;

use crate::text_table::{detect_table_blocks, split_cells};

/// Extract content from PDF bytes.
///
/// Every page is tried for tables first. If any page yields one, all page
/// tables are concatenated positionally into a single structured table
/// (first table's first row supplies the header; later blocks repeating
/// that header drop it). Only when no page yields a table does the input
/// degrade to text lines. A page that produces no text contributes nothing
/// and records a warning; it never aborts the remaining pages.
pub(crate) fn extract_pdf(
    bytes: &[u8],
    warnings: &mut Vec<ExtractWarning>,
) -> ExtractedContent {
    let pages = page_texts(bytes, warnings);
    if pages.iter().all(|text| text.trim().is_empty()) {
        return ExtractedContent::Empty;
    }

    let mut table: Option<StructuredTable> = None;
    for text in &pages {
        for block in detect_table_blocks(text) {
            append_block(&mut table, block);
        }
    }
    if let Some(table) = table {
        return ExtractedContent::Table(table);
    }

    // Text fallback: accumulate trimmed, deduplicated lines in page order.
    let mut lines = LineSet::new();
    for text in &pages {
        lines.extend_from_text(text);
    }
    if lines.is_empty() {
        ExtractedContent::Empty
    } else {
        ExtractedContent::Lines(lines)
    }
}

/// Concatenate one detected block onto the document table.
///
/// The first block's first row becomes the header. Later blocks are matched
/// by position: a leading row that repeats the header (case-insensitively)
/// is dropped and everything else is data. A block with a *different* header
/// simply contributes that row as data, mismatched columns staying
/// unaligned.
fn append_block(table: &mut Option<StructuredTable>, block: Vec<Vec<String>>) {
    let mut rows = block.into_iter();
    match table {
        None => {
            let Some(header) = rows.next() else { return };
            let columns = header
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let name = name.trim();
                    if name.is_empty() {
                        format!("column_{}", i + 1)
                    } else {
                        name.to_string()
                    }
                })
                .collect();
            let mut fresh = StructuredTable::new(columns);
            for row in rows {
                fresh.push_text_row(row);
            }
            *table = Some(fresh);
        }
        Some(table) => {
            let mut rows = rows.peekable();
            if rows
                .peek()
                .is_some_and(|first| repeats_header(first, table.columns()))
            {
                rows.next();
            }
            for row in rows {
                table.push_text_row(row);
            }
        }
    }
}

fn repeats_header(row: &[String], columns: &[String]) -> bool {
    row.len() == columns.len()
        && row
            .iter()
            .zip(columns)
            .all(|(cell, column)| cell.trim().eq_ignore_ascii_case(column))
}

/// Extract one text string per page.
///
/// Two candidates per page: lopdf's own page text extraction, and a
/// whole-document `pdf-extract` pass split on form feeds (used when its
/// page count agrees). The candidate that looks more table-like wins. A
/// page with no usable candidate contributes an empty string and a
/// `PageFailed` warning.
fn page_texts(bytes: &[u8], warnings: &mut Vec<ExtractWarning>) -> Vec<String> {
    let fallback_pages = pdf_extract::extract_text_from_mem(bytes)
        .ok()
        .map(|text| split_form_feed_pages(&text));

    let document = match Document::load_mem(bytes) {
        Ok(document) => document,
        Err(error) => {
            tracing::warn!(%error, "PDF structure unreadable");
            warnings.push(ExtractWarning::new(
                ExtractWarningCode::Other("pdf load failed".to_string()),
                error.to_string(),
            ));
            // The whole-document pass may still have worked.
            return fallback_pages.unwrap_or_default();
        }
    };

    let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
    let fallback_aligned = fallback_pages
        .as_ref()
        .filter(|pages| pages.len() == page_numbers.len());

    let mut pages = Vec::with_capacity(page_numbers.len());
    for (index, page_no) in page_numbers.iter().enumerate() {
        let mut candidates: Vec<String> = Vec::new();
        match document.extract_text(&[*page_no]) {
            Ok(text) if !text.trim().is_empty() => candidates.push(text),
            Ok(_) => {}
            Err(error) => {
                tracing::debug!(page = *page_no, %error, "lopdf page extraction failed");
            }
        }
        if let Some(text) = fallback_aligned.and_then(|pages| pages.get(index)) {
            if !text.trim().is_empty() {
                candidates.push(text.clone());
            }
        }

        let best = candidates
            .into_iter()
            .max_by_key(|text| table_likeness(text));
        match best {
            Some(text) => pages.push(text),
            None => {
                warnings.push(
                    ExtractWarning::new(
                        ExtractWarningCode::PageFailed,
                        "page produced no usable text",
                    )
                    .on_page(index + 1),
                );
                pages.push(String::new());
            }
        }
    }
    pages
}

/// `pdf-extract` separates pages with form feeds.
fn split_form_feed_pages(text: &str) -> Vec<String> {
    let mut pages: Vec<String> = text.split('\u{000C}').map(str::to_string).collect();
    if pages.last().is_some_and(|last| last.trim().is_empty()) {
        pages.pop();
    }
    pages
}

/// Rough score of how table-like a page text is: multi-cell lines dominate,
/// plain non-empty lines break ties.
fn table_likeness(text: &str) -> usize {
    let mut score = 0;
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        score += 1;
        if split_cells(line).len() >= 2 {
            score += 10;
        }
    }
    score
}
