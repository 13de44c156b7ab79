//! Export tests (document tree → Markdown)

use crate::common::{parse_doc, roundtrip};
use insta::assert_snapshot;
use prosemark::{Mark, Node, NodeKind};

#[test]
fn non_doc_root_renders_empty() {
    let para = Node::block(NodeKind::Paragraph, vec![Node::text("x")]);
    assert_eq!(prosemark::to_markdown(&para), "");
}

#[test]
fn hand_built_document_serializes() {
    let doc = Node::doc(vec![
        Node::block(NodeKind::Heading, vec![Node::text("Notes")]).with_attr("level", 1),
        Node::block(
            NodeKind::Paragraph,
            vec![
                Node::text("see "),
                Node::text("here").with_marks(vec![Mark::link("https://example.com")]),
            ],
        ),
    ]);
    assert_eq!(
        prosemark::to_markdown(&doc),
        "# Notes\n\nsee [here](https://example.com)"
    );
}

#[test]
fn mixed_document_snapshot() {
    let markdown = roundtrip("# Title\n\nHello **world**\n\n- one\n- two\n");
    assert_snapshot!(markdown, @r"
# Title

Hello **world**

- one
- two
");
}

#[test]
fn blockquote_and_code_snapshot() {
    let markdown = roundtrip("> a quote\n\n```rust\nlet x = 1;\n```\n");
    assert_snapshot!(markdown, @r"
> a quote

```rust
let x = 1;
```
");
}

#[test]
fn unknown_node_kinds_pass_children_through() {
    let doc = Node::doc(vec![Node::block(
        NodeKind::Other("callout".to_string()),
        vec![Node::block(NodeKind::Paragraph, vec![Node::text("inside")])],
    )]);
    assert_eq!(prosemark::to_markdown(&doc), "inside");
}

#[test]
fn serialization_does_not_mutate_the_tree() {
    let doc = parse_doc("**bold** text\n");
    let before = doc.clone();
    let _ = prosemark::to_markdown(&doc);
    assert_eq!(doc, before);
}
