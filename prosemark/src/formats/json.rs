//! JSON format implementation
//!
//! The document tree in its editor-facing JSON shape, pretty-printed. This
//! is the storage/interchange representation; parsing accepts any tree the
//! data model can hold, including unknown node types.

use crate::doc::Node;
use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for the document-tree JSON shape.
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Document tree as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        serde_json::from_str(source)
            .map_err(|error| FormatError::ParseError(format!("Invalid document JSON: {error}")))
    }

    fn serialize(&self, document: &Node) -> Result<String, FormatError> {
        serde_json::to_string_pretty(document)
            .map_err(|error| FormatError::SerializationError(error.to_string()))
    }
}
