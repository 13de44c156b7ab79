//! Block-level element extensions.
//!
//! All four lean on the tokenizer's default CommonMark rules and exist to
//! name the supported element; none of them needs setup or post-processing.

use crate::pipeline::Extension;

/// Headings (`#` through `######`).
pub struct HeadingExtension;

impl Extension for HeadingExtension {
    fn name(&self) -> &str {
        "heading"
    }
}

/// Ordered and unordered lists (`- item`, `1. item`).
pub struct ListExtension;

impl Extension for ListExtension {
    fn name(&self) -> &str {
        "list"
    }
}

/// Blockquotes (`> quoted`).
pub struct BlockquoteExtension;

impl Extension for BlockquoteExtension {
    fn name(&self) -> &str {
        "blockquote"
    }
}

/// Fenced code blocks (```` ``` ````).
pub struct CodeBlockExtension;

impl Extension for CodeBlockExtension {
    fn name(&self) -> &str {
        "code_block"
    }
}
