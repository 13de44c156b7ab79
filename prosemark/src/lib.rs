//! Bidirectional conversion between Markdown and a rich-text document tree
//!
//!     This crate converts Markdown source into the hierarchical document
//!     tree a rich-text editor consumes (typed nodes, ordered children, text
//!     runs annotated with inline marks), and renders such trees back into
//!     Markdown source.
//!
//!     This is a pure lib: it powers the prosemark CLI but is shell
//!     agnostic, that is no code here should suppose a shell environment, be
//!     it to std print, env vars etc. Diagnostics are result-carried.
//!
//! Architecture
//!
//!     Data flows one direction per operation:
//!
//!     forward:  Markdown text → tokens → (rewritten tokens) → tree
//!     reverse:  tree → Markdown text
//!
//!     The two directions share the tree data model (./doc) but use
//!     independent algorithms; neither is the inverse of the other's
//!     internals.
//!
//!     The file structure:
//!     .
//!     ├── error.rs                # Error taxonomy and format errors
//!     ├── token.rs                # Flat token stream model
//!     ├── tokenizer.rs            # comrak adapter producing the stream
//!     ├── pipeline.rs             # Extension trait + ordered pipeline
//!     ├── extensions              # Built-in extensions (task lists, ...)
//!     ├── doc                     # Document tree model + validation
//!     ├── builder.rs              # Token stream → tree (stack machine)
//!     ├── serializer.rs           # Tree → Markdown text
//!     ├── parser.rs               # Conversion facade (parse envelope)
//!     ├── config.rs               # Explicit parser configuration
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery/selection
//!     └── formats                 # markdown / json / tree formats
//!
//! Core Algorithms
//!
//!     The hard part of the work is turning the flat token stream back into
//!     a nested tree (./builder.rs): a single pass over the stream driven by
//!     a stack of open containers, where block frames become nodes and
//!     transient mark frames dissolve into marks on text leaves. The reverse operation (./serializer.rs) is a recursive
//!     kind-dispatched renderer where every block emits its own trailing
//!     separator. Keeping both over one well-tested data model frees the
//!     format layer (./formats) to be thin adapters.
//!
//! Extensions
//!
//!     Markdown feature support is organized as extensions (./extensions):
//!     each one may configure the tokenizer and rewrite the token stream
//!     after tokenization, in registration order. Reclassification decisions
//!     are made from the stream alone — the task list extension is the
//!     canonical example, turning annotated bullet markup into task tokens
//!     with a bounded lookahead for the checked state.
//!
//! Library Choices
//!
//!     We never hand-roll the Markdown parsing itself: the `comrak` crate
//!     owns CommonMark compliance and the GFM extensions (tables,
//!     strikethrough, task lists), and ./tokenizer.rs only flattens its AST
//!     into the token stream. serde/serde_json carry the editor-facing JSON
//!     shape of the tree and the diagnostics envelope.

pub mod builder;
pub mod config;
pub mod doc;
pub mod error;
pub mod extensions;
pub mod format;
pub mod formats;
pub mod parser;
pub mod pipeline;
pub mod registry;
pub mod serializer;
pub mod token;
pub mod tokenizer;

pub use config::ParserConfig;
pub use doc::{Mark, MarkKind, Node, NodeKind};
pub use error::{ErrorCode, FormatError, ParserError};
pub use format::Format;
pub use parser::{ConversionResult, MarkdownParser, ParseStats};
pub use pipeline::Extension;
pub use registry::FormatRegistry;

/// Parse Markdown with the default configuration and the standard
/// extension set.
pub fn parse(markdown: &str) -> Result<ConversionResult, ParserError> {
    MarkdownParser::with_defaults().parse(markdown)
}

/// Render a document tree as Markdown source.
pub fn to_markdown(document: &Node) -> String {
    serializer::to_markdown(document)
}
