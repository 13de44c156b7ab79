//! Token post-processing pipeline.
//!
//! Extensions are the unit of Markdown feature support. Each one can
//! configure the tokenizer (`setup`) and rewrite the token stream after
//! tokenization (`post_process`). Registration order is load-bearing: the
//! pipeline applies `post_process` hooks strictly in the order extensions
//! were registered, so the registry is an ordered list, never a set.

use crate::error::ParserError;
use crate::token::Token;
use crate::tokenizer::TokenizerOptions;

/// A Markdown feature extension.
///
/// Both hooks have default bodies, so a minimal extension only names itself.
/// `post_process` rewrites the stream in place; reclassification decisions
/// must rely only on the token stream itself (kinds, tags, attrs), never on
/// outside state.
pub trait Extension: Send + Sync {
    /// The name of this extension (e.g., "task_list")
    fn name(&self) -> &str;

    /// Configure the tokenizer. Most extensions only flip option switches;
    /// the default implementation leaves the tokenizer untouched.
    fn setup(&self, _options: &mut TokenizerOptions) {}

    /// Rewrite the token stream after tokenization. Optional hook; the
    /// default implementation passes the stream through unchanged.
    fn post_process(&self, _tokens: &mut Vec<Token>) -> Result<(), String> {
        Ok(())
    }
}

/// Ordered extension registry and post-processing pipeline.
pub struct Pipeline {
    extensions: Vec<Box<dyn Extension>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Pipeline {
            extensions: Vec::new(),
        }
    }

    /// Register an extension, running its `setup` against the tokenizer
    /// options. Registration order is preserved.
    pub fn register(&mut self, extension: Box<dyn Extension>, options: &mut TokenizerOptions) {
        extension.setup(options);
        self.extensions.push(extension);
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Run every `post_process` hook over the stream in registration order.
    ///
    /// A failing extension is recorded and skipped; its effects are
    /// independent of the others, so the stream flows on to the next
    /// extension. With `abort_on_error` the pipeline stops at the first
    /// failure instead.
    pub fn apply(&self, tokens: &mut Vec<Token>, abort_on_error: bool) -> Vec<ParserError> {
        let mut errors = Vec::new();

        for extension in &self.extensions {
            if let Err(message) = extension.post_process(tokens) {
                errors.push(ParserError::for_extension(extension.name(), message));
                if abort_on_error {
                    break;
                }
            }
        }

        errors
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
