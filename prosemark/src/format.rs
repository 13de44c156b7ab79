//! Format trait definition
//!
//! A format is one textual representation of the rich-text document tree.
//! Implementors provide parsing (source → tree), serialization (tree →
//! source), or both, behind one uniform interface so callers and the CLI
//! can treat every representation the same way.

use crate::doc::Node;
use crate::error::FormatError;

/// Trait for document representations.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, document: &Node) -> Result<String, FormatError> {
///         // Render the tree
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading
    /// dot. Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → tree)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (tree → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a document tree.
    ///
    /// Default implementation returns NotSupported; formats that support
    /// parsing override this.
    fn parse(&self, _source: &str) -> Result<Node, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a document tree into source text.
    ///
    /// Default implementation returns NotSupported; formats that support
    /// serialization override this.
    fn serialize(&self, _document: &Node) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
