//! Round-trip stability tests.
//!
//! The tree→text→tree leg must be stable: serializing a built document and
//! parsing the output again yields a structurally equivalent tree. The
//! text→tree→text leg only preserves meaning, not literal formatting.

use crate::common::{parse_doc, roundtrip};

/// Assert the tree→text→tree leg is a fixed point for this input.
fn assert_tree_stable(markdown: &str) {
    let doc = parse_doc(markdown);
    let rendered = prosemark::to_markdown(&doc);
    let reparsed = parse_doc(&rendered);
    assert_eq!(doc, reparsed, "tree changed across round-trip for {markdown:?}");
}

#[test]
fn paragraph_with_marks_is_stable() {
    assert_tree_stable("plain **bold** *italic* ~~strike~~ `code`\n");
}

#[test]
fn nested_mark_delimiters_are_stable() {
    assert_tree_stable("***both***\n");
}

#[test]
fn headings_are_stable() {
    assert_tree_stable("# One\n\n## Two\n\n### Three\n");
}

#[test]
fn links_are_stable() {
    assert_tree_stable("start [text](https://example.com) end\n");
}

#[test]
fn flat_lists_are_stable() {
    assert_tree_stable("- a\n- b\n- c\n");
    assert_tree_stable("1. a\n2. b\n");
}

#[test]
fn code_blocks_are_stable() {
    assert_tree_stable("```rust\nfn main() {}\n```\n");
    assert_tree_stable("```\nno language\n```\n");
}

#[test]
fn blockquotes_are_stable() {
    assert_tree_stable("> quoted\n");
}

#[test]
fn task_lists_are_stable() {
    assert_tree_stable("- [x] Done\n- [ ] Pending\n");
}

#[test]
fn tables_are_stable() {
    assert_tree_stable("| A | B |\n| --- | --- |\n| 1 | 2 |\n");
}

#[test]
fn serialized_output_is_idempotent() {
    // text → tree → text reaches a fixed point after one pass.
    let inputs = [
        "#  Loosely   spaced heading\n",
        "some *marks* here\n\nand a second paragraph\n",
        "- item one\n- item two\n",
    ];
    for input in inputs {
        let once = roundtrip(input);
        let twice = roundtrip(&once);
        assert_eq!(once, twice, "serialization not idempotent for {input:?}");
    }
}

#[test]
fn whole_document_is_stable() {
    let md = "\
# Guide

Intro paragraph with **bold** and a [link](https://example.com).

## Tasks

- [x] shipped
- [ ] pending

```sh
make test
```

> final note
";
    assert_tree_stable(md);
}
