//! Document tree shape validation.
//!
//! The validator is read-only and never escalates: every finding is a
//! warning the facade attaches to the conversion result, and none of them
//! block serialization. Checks that the typed tree makes structurally
//! impossible (content being a non-sequence) are not re-checked here; the
//! remaining dynamic checks matter for documents deserialized from JSON.

use crate::doc::nodes::{Node, NodeKind};
use crate::error::{ErrorCode, ParserError};

/// Validate a document tree, returning one warning per finding.
///
/// Findings in nested content are annotated with the child's position at
/// every level (`Error in content[2]: ...`) so a deep defect stays
/// traceable to its path.
pub fn validate(node: &Node) -> Vec<ParserError> {
    let mut errors = Vec::new();

    if node.kind.as_str().is_empty() {
        errors.push(ParserError::new(
            ErrorCode::ValidationError,
            "Node is missing required \"type\" property",
        ));
    }

    for (index, child) in node.content.iter().enumerate() {
        for error in validate(child) {
            errors.push(ParserError {
                message: format!("Error in content[{index}]: {}", error.message),
                ..error
            });
        }
    }

    for (index, mark) in node.marks.iter().enumerate() {
        if mark.kind.as_str().is_empty() {
            errors.push(ParserError::new(
                ErrorCode::ValidationError,
                format!("Mark at index {index} is missing required \"type\" property"),
            ));
        }
    }

    if node.kind == NodeKind::Text && node.text.is_none() {
        errors.push(ParserError::new(
            ErrorCode::ValidationError,
            "Text node is missing required \"text\" property",
        ));
    }

    errors
}
