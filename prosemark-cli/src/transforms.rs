//! CLI inspect transforms
//!
//! Each transform exposes one processing stage of the conversion pipeline:
//!
//! 1. **Tokenization + pipeline** — Markdown → rewritten token stream
//!    - `tokens-json`: the post-pipeline token stream as JSON
//! 2. **Tree construction** — tokens → document tree
//!    - `doc-json`: the built document tree as JSON
//!    - `doc-tree`: the built document tree as an indented visualization

use prosemark::format::Format;
use prosemark::formats::TreeFormat;
use prosemark::{MarkdownParser, ParserConfig};

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &["tokens-json", "doc-json", "doc-tree"];

/// Run a transform over Markdown source, returning printable output.
pub fn run_transform(
    name: &str,
    source: &str,
    config: &ParserConfig,
) -> Result<String, String> {
    let mut parser = MarkdownParser::new(config.clone());
    for extension in prosemark::extensions::default_extensions() {
        parser.register_extension(extension);
    }

    match name {
        "tokens-json" => {
            let (tokens, errors) = parser.tokens(source);
            if let Some(error) = errors.first() {
                return Err(error.to_string());
            }
            serde_json::to_string_pretty(&tokens).map_err(|e| e.to_string())
        }
        "doc-json" => {
            let result = parser.parse(source).map_err(|e| e.to_string())?;
            serde_json::to_string_pretty(&result.document).map_err(|e| e.to_string())
        }
        "doc-tree" => {
            let result = parser.parse(source).map_err(|e| e.to_string())?;
            TreeFormat
                .serialize(&result.document)
                .map_err(|e| e.to_string())
        }
        other => Err(format!("unknown transform '{other}'")),
    }
}
