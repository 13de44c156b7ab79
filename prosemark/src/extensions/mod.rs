//! Built-in Markdown extensions.
//!
//! Every supported Markdown element is owned by exactly one extension, even
//! when the tokenizer's default rules already handle it — the registry then
//! documents the supported surface in one place. Only extensions whose
//! element needs tokenizer switches or token rewriting carry real code; the
//! rest are named no-ops.

mod blocks;
mod inline;
mod table;
mod task_list;

pub use blocks::{BlockquoteExtension, CodeBlockExtension, HeadingExtension, ListExtension};
pub use inline::{BoldExtension, CodeExtension, ItalicExtension, LinkExtension, StrikeExtension};
pub use table::TableExtension;
pub use task_list::TaskListExtension;

use crate::pipeline::Extension;

/// The standard extension set, in registration order.
pub fn default_extensions() -> Vec<Box<dyn Extension>> {
    vec![
        Box::new(HeadingExtension),
        Box::new(BoldExtension),
        Box::new(ItalicExtension),
        Box::new(StrikeExtension),
        Box::new(CodeExtension),
        Box::new(CodeBlockExtension),
        Box::new(LinkExtension),
        Box::new(ListExtension),
        Box::new(BlockquoteExtension),
        Box::new(TableExtension),
        Box::new(TaskListExtension),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::TokenizerOptions;

    #[test]
    fn default_set_enables_the_expected_tokenizer_switches() {
        let mut options = TokenizerOptions::default();
        for extension in default_extensions() {
            extension.setup(&mut options);
        }
        assert!(options.tables);
        assert!(options.strikethrough);
        assert!(options.tasklist);
    }
}
