//! Integration tests driving PDF extraction over generated fixtures.

use docjoin_core::{ContentKind, ExtractedContent};
use docjoin_extract::{InputFormat, RawInput, extract};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

/// Build an in-memory PDF with one content stream per page, each page
/// showing the given lines top to bottom in Courier.
fn pdf_bytes(pages: &[Vec<&str>]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut page_ids = Vec::new();
    for lines in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("TL", vec![16.into()]),
            Operation::new("Td", vec![50.into(), 780.into()]),
        ];
        for (index, line) in lines.iter().enumerate() {
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            if index + 1 < lines.len() {
                operations.push(Operation::new("T*", vec![]));
            }
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        page_ids.push(page_id);
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|id| (*id).into()).collect::<Vec<_>>(),
            "Count" => page_ids.len() as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("serialize fixture PDF");
    bytes
}

#[test]
fn tabular_pdf_extracts_to_table() {
    let bytes = pdf_bytes(&[vec!["ID  Name  Score", "1  Alice  90", "2  Bob  75"]]);
    let output = extract(&RawInput::new(bytes, InputFormat::Pdf));

    let ExtractedContent::Table(table) = output.content else {
        panic!("expected a table, got {:?}", output.content.kind());
    };
    assert_eq!(table.columns(), ["ID", "Name", "Score"]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.cell(0, 1), Some("Alice"));
    assert_eq!(table.cell(1, 2), Some("75"));
}

#[test]
fn repeated_header_across_pages_contributes_once() {
    let bytes = pdf_bytes(&[
        vec!["ID  Name  Score", "1  Alice  90"],
        vec!["ID  Name  Score", "2  Bob  75"],
    ]);
    let output = extract(&RawInput::new(bytes, InputFormat::Pdf));

    let ExtractedContent::Table(table) = output.content else {
        panic!("expected a table, got {:?}", output.content.kind());
    };
    assert_eq!(table.columns(), ["ID", "Name", "Score"]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.cell(1, 0), Some("2"));
}

#[test]
fn prose_pdf_falls_back_to_lines() {
    let bytes = pdf_bytes(&[
        vec![
            "This document is a narrative report.",
            "It contains no tabular data at all.",
        ],
        vec!["It contains no tabular data at all."],
    ]);
    let output = extract(&RawInput::new(bytes, InputFormat::Pdf));

    let ExtractedContent::Lines(lines) = output.content else {
        panic!("expected lines, got {:?}", output.content.kind());
    };
    // Deduplicated across pages, first occurrence kept.
    assert_eq!(lines.len(), 2);
    assert_eq!(lines.lines()[0], "This document is a narrative report.");
}

#[test]
fn corrupt_pdf_degrades_to_empty_with_warnings() {
    let output = extract(&RawInput::new(b"%PDF-1.5 truncated garbage".to_vec(), InputFormat::Pdf));
    assert_eq!(output.content.kind(), ContentKind::Empty);
    assert!(!output.warnings.is_empty());
}
