//! Document tree to Markdown rendering.
//!
//! Rendering dispatches purely on node kind. Every block renderer ends its
//! own output with an explicit trailing separator, so siblings concatenate
//! with no extra joining logic. Unrecognized kinds render as their children
//! with no wrapping — a transparent pass-through, never an error.

use crate::doc::{Mark, MarkKind, Node, NodeKind};

/// Render a document tree as Markdown source.
///
/// The root must be a `doc` node with content; anything else renders as the
/// empty string. The input is never mutated.
pub fn to_markdown(doc: &Node) -> String {
    if doc.kind != NodeKind::Doc || doc.content.is_empty() {
        return String::new();
    }
    render_nodes(&doc.content).trim().to_string()
}

fn render_nodes(nodes: &[Node]) -> String {
    nodes.iter().map(render_node).collect()
}

fn render_node(node: &Node) -> String {
    match &node.kind {
        NodeKind::Paragraph => format!("{}\n\n", render_nodes(&node.content)),

        NodeKind::Heading => {
            let level = node.attr_u64("level").unwrap_or(1) as usize;
            format!("{} {}\n\n", "#".repeat(level), render_nodes(&node.content))
        }

        NodeKind::Text => render_text(node),

        NodeKind::BulletList | NodeKind::TaskList => {
            format!("{}\n", render_nodes(&node.content))
        }

        NodeKind::OrderedList => {
            let items: String = node
                .content
                .iter()
                .enumerate()
                .map(|(index, item)| render_list_item(item, Some(index + 1)))
                .collect();
            format!("{items}\n")
        }

        NodeKind::ListItem => render_list_item(node, None),

        NodeKind::TaskItem => {
            let marker = if node.attr_bool("checked").unwrap_or(false) {
                "[x]"
            } else {
                "[ ]"
            };
            format!("- {marker} {}\n", render_nodes(&node.content).trim())
        }

        NodeKind::CodeBlock => {
            let language = node.attr_str("language").unwrap_or("");
            format!("```{language}\n{}```\n\n", render_nodes(&node.content))
        }

        NodeKind::Blockquote => {
            let content = render_nodes(&node.content);
            let quoted: Vec<String> = content
                .trim()
                .split('\n')
                .map(|line| format!("> {line}"))
                .collect();
            format!("{}\n\n", quoted.join("\n"))
        }

        NodeKind::Table => render_table(node),

        NodeKind::TableRow => render_table_row(node),

        NodeKind::TableHeader | NodeKind::TableCell => render_table_cell(node),

        // Transparent pass-through for the root kind in non-root position
        // and for anything this serializer does not know.
        NodeKind::Doc | NodeKind::Other(_) => render_nodes(&node.content),
    }
}

fn render_text(node: &Node) -> String {
    let Some(text) = node.text.as_deref() else {
        return String::new();
    };
    if text.is_empty() {
        return String::new();
    }

    // Marks wrap iteratively in array order: the first mark ends up
    // innermost. Delimiter nesting follows the array, not any canonical
    // priority.
    let mut out = text.to_string();
    for mark in &node.marks {
        out = apply_mark(&out, mark);
    }
    out
}

fn apply_mark(text: &str, mark: &Mark) -> String {
    match &mark.kind {
        MarkKind::Bold => format!("**{text}**"),
        MarkKind::Italic => format!("*{text}*"),
        MarkKind::Code => format!("`{text}`"),
        MarkKind::Strike => format!("~~{text}~~"),
        MarkKind::Link => {
            let href = mark.attr_str("href").unwrap_or("");
            format!("[{text}]({href})")
        }
        MarkKind::Other(_) => text.to_string(),
    }
}

fn render_list_item(node: &Node, index: Option<usize>) -> String {
    let prefix = match index {
        Some(position) => format!("{position}. "),
        None => "- ".to_string(),
    };
    format!("{prefix}{}\n", render_nodes(&node.content).trim())
}

/// Render a table, inserting a dashed separator row after the first row.
/// The tree has no header-row flag, so the first row is assumed to be the
/// header by position.
fn render_table(node: &Node) -> String {
    if node.content.is_empty() {
        return String::new();
    }

    let mut rows: Vec<String> = node.content.iter().map(render_table_row).collect();

    if let Some(first) = node.content.first() {
        if !first.content.is_empty() {
            let dashes = vec![" --- "; first.content.len()];
            rows.insert(1, format!("|{}|\n", dashes.join("|")));
        }
    }

    format!("{}\n", rows.concat())
}

fn render_table_row(node: &Node) -> String {
    if node.content.is_empty() {
        return String::new();
    }

    let cells: Vec<String> = node.content.iter().map(render_table_cell).collect();
    format!("|{}|\n", cells.join("|"))
}

fn render_table_cell(node: &Node) -> String {
    format!(" {} ", render_nodes(&node.content).trim())
}
