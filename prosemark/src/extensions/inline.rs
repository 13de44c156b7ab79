//! Inline mark extensions.

use crate::pipeline::Extension;
use crate::tokenizer::TokenizerOptions;

/// Bold text (`**bold**`), handled by the tokenizer's strong rule.
pub struct BoldExtension;

impl Extension for BoldExtension {
    fn name(&self) -> &str {
        "bold"
    }
}

/// Italic text (`*italic*`), handled by the tokenizer's emphasis rule.
pub struct ItalicExtension;

impl Extension for ItalicExtension {
    fn name(&self) -> &str {
        "italic"
    }
}

/// Strikethrough text (`~~strike~~`). Not part of core CommonMark, so the
/// tokenizer switch has to be turned on.
pub struct StrikeExtension;

impl Extension for StrikeExtension {
    fn name(&self) -> &str {
        "strike"
    }

    fn setup(&self, options: &mut TokenizerOptions) {
        options.strikethrough = true;
    }
}

/// Inline code spans (`` `code` ``).
pub struct CodeExtension;

impl Extension for CodeExtension {
    fn name(&self) -> &str {
        "code"
    }
}

/// `[text](url)` links, handled by the tokenizer's default link rule.
pub struct LinkExtension;

impl Extension for LinkExtension {
    fn name(&self) -> &str {
        "link"
    }
}
