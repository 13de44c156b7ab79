//! Import tests (Markdown → document tree)

use crate::common::{parse_doc, parse_result};
use prosemark::{MarkKind, NodeKind};

#[test]
fn simple_paragraph() {
    let doc = parse_doc("This is a simple paragraph.\n");
    assert_eq!(doc.kind, NodeKind::Doc);
    assert_eq!(doc.content.len(), 1);

    let para = &doc.content[0];
    assert_eq!(para.kind, NodeKind::Paragraph);
    assert_eq!(
        para.content[0].text.as_deref(),
        Some("This is a simple paragraph.")
    );
}

#[test]
fn bold_and_italic_marks() {
    // "**bold** and *italic*" becomes one paragraph with three runs: a bold
    // leaf, plain joining text, an italic leaf.
    let doc = parse_doc("**bold** and *italic*\n");
    let para = &doc.content[0];

    assert_eq!(para.content.len(), 3);

    assert_eq!(para.content[0].text.as_deref(), Some("bold"));
    assert_eq!(para.content[0].marks[0].kind, MarkKind::Bold);

    assert_eq!(para.content[1].text.as_deref(), Some(" and "));
    assert!(para.content[1].marks.is_empty());

    assert_eq!(para.content[2].text.as_deref(), Some("italic"));
    assert_eq!(para.content[2].marks[0].kind, MarkKind::Italic);
}

#[test]
fn heading_levels() {
    let doc = parse_doc("# One\n\n###### Six\n");
    assert_eq!(doc.content[0].attr_u64("level"), Some(1));
    assert_eq!(doc.content[1].attr_u64("level"), Some(6));
}

#[test]
fn strike_mark() {
    let doc = parse_doc("~~gone~~\n");
    let leaf = &doc.content[0].content[0];
    assert_eq!(leaf.text.as_deref(), Some("gone"));
    assert_eq!(leaf.marks[0].kind, MarkKind::Strike);
}

#[test]
fn inline_code_mark() {
    let doc = parse_doc("run `cargo fmt` now\n");
    let para = &doc.content[0];
    assert_eq!(para.content[1].text.as_deref(), Some("cargo fmt"));
    assert_eq!(para.content[1].marks[0].kind, MarkKind::Code);
}

#[test]
fn link_collapses_to_single_marked_run() {
    let doc = parse_doc("[the docs](https://example.com/docs)\n");
    let para = &doc.content[0];

    assert_eq!(para.content.len(), 1);
    let leaf = &para.content[0];
    assert_eq!(leaf.text.as_deref(), Some("the docs"));
    assert_eq!(leaf.marks.len(), 1);
    assert_eq!(leaf.marks[0].kind, MarkKind::Link);
    assert_eq!(
        leaf.marks[0].attr_str("href"),
        Some("https://example.com/docs")
    );
}

#[test]
fn code_block_with_language() {
    let doc = parse_doc("```rust\nfn main() {}\n```\n");
    let block = &doc.content[0];

    assert_eq!(block.kind, NodeKind::CodeBlock);
    assert_eq!(block.attr_str("language"), Some("rust"));
    assert_eq!(block.content[0].text.as_deref(), Some("fn main() {}\n"));
}

#[test]
fn code_block_without_language_has_null_attr() {
    let doc = parse_doc("```\nplain\n```\n");
    let block = &doc.content[0];
    assert!(block.attr("language").is_some());
    assert_eq!(block.attr_str("language"), None);
}

#[test]
fn blockquote_holds_block_children() {
    let doc = parse_doc("> quoted text\n");
    let quote = &doc.content[0];
    assert_eq!(quote.kind, NodeKind::Blockquote);
    assert_eq!(quote.content[0].kind, NodeKind::Paragraph);
}

#[test]
fn nested_list_structure() {
    let md = "- outer\n  - inner\n";
    let doc = parse_doc(md);

    let list = &doc.content[0];
    assert_eq!(list.kind, NodeKind::BulletList);
    let item = &list.content[0];
    assert_eq!(item.kind, NodeKind::ListItem);
    // The nested list sits beside the item's paragraph.
    assert!(item
        .content
        .iter()
        .any(|child| child.kind == NodeKind::BulletList));
}

#[test]
fn ordered_list_items() {
    let doc = parse_doc("1. first\n2. second\n");
    let list = &doc.content[0];
    assert_eq!(list.kind, NodeKind::OrderedList);
    assert_eq!(list.content.len(), 2);
}

#[test]
fn soft_breaks_join_with_spaces() {
    let doc = parse_doc("line one\nline two\n");
    let para = &doc.content[0];
    let text: String = para
        .content
        .iter()
        .filter_map(|leaf| leaf.text.as_deref())
        .collect();
    assert_eq!(text, "line one line two");
}

#[test]
fn images_are_dropped_silently() {
    let result = parse_result("before ![alt](img.png) after\n");
    assert!(result.errors.is_empty());

    let text: String = result.document.content[0]
        .content
        .iter()
        .filter_map(|leaf| leaf.text.as_deref())
        .collect();
    assert_eq!(text, "before  after");
}

#[test]
fn stats_count_tokens_and_time() {
    let result = parse_result("# A\n\nB\n");
    assert!(result.stats.token_count >= 6);
    assert!(result.stats.parse_time_ms >= 0.0);
}

#[test]
fn clean_parse_has_no_warnings() {
    let result = parse_result("# A\n\n- one\n- two\n");
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}
