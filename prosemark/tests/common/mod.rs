//! Shared helpers for the integration tests.

use prosemark::{ConversionResult, MarkdownParser, Node};

/// Parse with the default configuration; the default facade never returns
/// `Err`, so unwrapping here is part of what the tests assert.
pub fn parse_result(markdown: &str) -> ConversionResult {
    MarkdownParser::with_defaults()
        .parse(markdown)
        .expect("default configuration must not escalate errors")
}

/// Parse and keep only the document.
pub fn parse_doc(markdown: &str) -> Node {
    parse_result(markdown).document
}

/// Forward then reverse conversion.
pub fn roundtrip(markdown: &str) -> String {
    prosemark::to_markdown(&parse_doc(markdown))
}
