//! Markdown format implementation
//!
//! Bidirectional conversion between Markdown and the document tree,
//! delegating to the conversion facade (parsing) and the tree serializer
//! (rendering).
//!
//! # Element Mapping Table
//!
//! | Markdown                | Tree node / mark              | Notes                                  |
//! |-------------------------|-------------------------------|----------------------------------------|
//! | Paragraph               | `paragraph`                   | Direct mapping                         |
//! | Heading (# ## ###)      | `heading` with `level` attr   | Level clamped to 1-6                   |
//! | **bold**, *italic*      | `bold` / `italic` mark        | Marks on text runs, not nodes          |
//! | ~~strike~~              | `strike` mark                 | Needs the strike extension             |
//! | `code`                  | `code` mark                   | Leaf with respect to nesting           |
//! | [text](url)             | `link` mark with `href` attr  | One text run per link                  |
//! | Code block (```)        | `codeBlock` + `language` attr | Info string → language, null if absent |
//! | > quote                 | `blockquote`                  | Direct mapping                         |
//! | Lists (- / 1.)          | `bulletList` / `orderedList`  | Items hold block content               |
//! | - [x] task              | `taskList` / `taskItem`       | `checked` attr from pipeline rewrite   |
//! | Pipe table              | `table` / `tableRow` / cells  | First row serializes as header         |
//!
//! # Lossy Conversions
//!
//! - Link marks collapse their run to plain text plus `href`; inner marks
//!   inside the link text are lost on import.
//! - The tree has no header-row flag, so a table whose first row is data
//!   still re-renders with a separator after it.
//! - Images, inline HTML and thematic breaks are dropped on import.

use crate::doc::Node;
use crate::error::FormatError;
use crate::format::Format;
use crate::parser::MarkdownParser;
use crate::serializer;

/// Format implementation for Markdown.
///
/// This surface intentionally drops non-critical diagnostics; callers who
/// need the full errors/warnings/stats envelope use [`MarkdownParser`]
/// directly.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown with tables, strikethrough and task lists"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        let parser = MarkdownParser::with_defaults();
        let result = parser
            .parse(source)
            .map_err(|error| FormatError::ParseError(error.to_string()))?;

        if let Some(critical) = result
            .errors
            .iter()
            .find(|error| parser.config().is_critical(error.code))
        {
            return Err(FormatError::ParseError(critical.message.clone()));
        }

        Ok(result.document)
    }

    fn serialize(&self, document: &Node) -> Result<String, FormatError> {
        Ok(serializer::to_markdown(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::NodeKind;

    #[test]
    fn parses_markdown_to_a_tree() {
        let doc = MarkdownFormat.parse("# Hi\n").unwrap();
        assert_eq!(doc.content[0].kind, NodeKind::Heading);
    }

    #[test]
    fn critical_input_failures_surface_as_parse_errors() {
        let oversized = "x".repeat(600_000);
        let result = MarkdownFormat.parse(&oversized);
        assert!(matches!(result, Err(FormatError::ParseError(_))));
    }

    #[test]
    fn serializes_a_tree_to_markdown() {
        let doc = MarkdownFormat.parse("Hello **world**\n").unwrap();
        let markdown = MarkdownFormat.serialize(&doc).unwrap();
        assert_eq!(markdown, "Hello **world**");
    }
}
