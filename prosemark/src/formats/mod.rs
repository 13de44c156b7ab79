//! Format implementations
//!
//! Each format converts between the rich-text document tree and one textual
//! representation: Markdown (the primary pair), the editor-facing JSON
//! shape, and an indented tree visualization for inspection.

pub mod json;
pub mod markdown;
pub mod tree;

pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
pub use tree::TreeFormat;
