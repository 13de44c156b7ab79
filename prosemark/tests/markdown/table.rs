//! Table conversion tests.

use crate::common::parse_doc;
use prosemark::NodeKind;

const TABLE_MD: &str = "| Name | Role |\n| --- | --- |\n| ada | eng |\n| tim | ops |\n";

#[test]
fn table_tree_shape() {
    let doc = parse_doc(TABLE_MD);
    let table = &doc.content[0];

    assert_eq!(table.kind, NodeKind::Table);
    assert_eq!(table.content.len(), 3);

    let header_row = &table.content[0];
    assert_eq!(header_row.kind, NodeKind::TableRow);
    assert_eq!(header_row.content[0].kind, NodeKind::TableHeader);
    assert_eq!(header_row.content[1].kind, NodeKind::TableHeader);

    let body_row = &table.content[1];
    assert_eq!(body_row.content[0].kind, NodeKind::TableCell);
}

#[test]
fn cell_content_is_inline() {
    let doc = parse_doc(TABLE_MD);
    let cell = &doc.content[0].content[0].content[0];
    assert_eq!(cell.content[0].text.as_deref(), Some("Name"));
}

#[test]
fn separator_row_is_rebuilt_after_first_row() {
    let doc = parse_doc(TABLE_MD);
    let markdown = prosemark::to_markdown(&doc);
    assert_eq!(
        markdown,
        "| Name | Role |\n| --- | --- |\n| ada | eng |\n| tim | ops |"
    );
}

#[test]
fn separator_width_matches_first_row_cell_count() {
    let doc = parse_doc("| A | B | C |\n| --- | --- | --- |\n| 1 | 2 | 3 |\n");
    let markdown = prosemark::to_markdown(&doc);
    assert!(markdown.contains("| --- | --- | --- |"));
}

#[test]
fn marked_text_inside_cells_survives() {
    let doc = parse_doc("| H |\n| --- |\n| **b** |\n");
    let markdown = prosemark::to_markdown(&doc);
    assert!(markdown.contains("| **b** |"));
}
