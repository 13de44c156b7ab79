//! Table support.

use crate::pipeline::Extension;
use crate::tokenizer::TokenizerOptions;

/// Pipe tables. The tokenizer owns row/cell structure; this extension only
/// turns the table rules on.
pub struct TableExtension;

impl Extension for TableExtension {
    fn name(&self) -> &str {
        "table"
    }

    fn setup(&self, options: &mut TokenizerOptions) {
        options.tables = true;
    }
}
