//! Tree visualization for document inspection.
//!
//! Serialize-only format rendering one node per line, structure encoded as
//! two-space indentation:
//!
//! ```text
//! doc
//!   heading {level=1}
//!     text "Title"
//!   paragraph
//!     text "Hello "
//!     text "world" [bold]
//! ```

use crate::doc::Node;
use crate::error::FormatError;
use crate::format::Format;

const LABEL_LIMIT: usize = 40;

/// Format implementation for the tree visualization.
pub struct TreeFormat;

impl Format for TreeFormat {
    fn name(&self) -> &str {
        "tree"
    }

    fn description(&self) -> &str {
        "Indented document tree visualization"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, document: &Node) -> Result<String, FormatError> {
        let mut out = String::new();
        render(document, 0, &mut out);
        Ok(out)
    }
}

fn render(node: &Node, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(node.kind.as_str());

    if !node.attrs.is_empty() {
        let attrs: Vec<String> = node
            .attrs
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        out.push_str(&format!(" {{{}}}", attrs.join(", ")));
    }

    if let Some(text) = &node.text {
        out.push_str(&format!(" {:?}", truncated(text)));
    }

    if !node.marks.is_empty() {
        let marks: Vec<&str> = node.marks.iter().map(|mark| mark.kind.as_str()).collect();
        out.push_str(&format!(" [{}]", marks.join(", ")));
    }

    out.push('\n');

    for child in &node.content {
        render(child, depth + 1, out);
    }
}

fn truncated(text: &str) -> String {
    if text.chars().count() <= LABEL_LIMIT {
        return text.to_string();
    }
    let head: String = text.chars().take(LABEL_LIMIT).collect();
    format!("{head}…")
}
