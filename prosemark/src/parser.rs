//! Conversion facade.
//!
//! [`MarkdownParser`] orchestrates one forward conversion: input validation
//! → tokenization → post-processing pipeline → tree build → output
//! validation, collecting statistics along the way. Failures never escape
//! `parse` as panics; they are carried in the result envelope, unless
//! `throw_on_error` explicitly escalates critical ones to `Err`.
//!
//! Each call is a pure function of its input plus the registered extension
//! set and configuration, which are fixed after construction — identical
//! input must always yield an identical tree.

use crate::builder;
use crate::config::ParserConfig;
use crate::doc::{self, Node};
use crate::error::{ErrorCode, ParserError};
use crate::extensions;
use crate::pipeline::{Extension, Pipeline};
use crate::serializer;
use crate::token::Token;
use crate::tokenizer::{self, TokenizerOptions};
use serde::Serialize;
use std::time::Instant;

/// Timing and volume statistics for one parse call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseStats {
    pub parse_time_ms: f64,
    pub token_count: usize,
}

/// Envelope returned by [`MarkdownParser::parse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub document: Node,
    pub errors: Vec<ParserError>,
    pub warnings: Vec<ParserError>,
    pub stats: ParseStats,
}

/// Markdown → document tree converter.
pub struct MarkdownParser {
    config: ParserConfig,
    options: TokenizerOptions,
    pipeline: Pipeline,
}

impl MarkdownParser {
    /// Parser with the given configuration and no extensions registered.
    pub fn new(config: ParserConfig) -> Self {
        MarkdownParser {
            config,
            options: TokenizerOptions::default(),
            pipeline: Pipeline::new(),
        }
    }

    /// Parser with the default configuration and the standard extension set.
    pub fn with_defaults() -> Self {
        let mut parser = MarkdownParser::new(ParserConfig::default());
        for extension in extensions::default_extensions() {
            parser.register_extension(extension);
        }
        parser
    }

    /// Register an extension. Its `setup` runs immediately against the
    /// tokenizer options; its `post_process` joins the pipeline in
    /// registration order.
    pub fn register_extension(&mut self, extension: Box<dyn Extension>) {
        self.pipeline.register(extension, &mut self.options);
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Tokenize and run the post-processing pipeline without building a
    /// tree. Used by inspection tooling.
    pub fn tokens(&self, markdown: &str) -> (Vec<Token>, Vec<ParserError>) {
        let mut tokens = tokenizer::tokenize(markdown, &self.options);
        let errors = self.pipeline.apply(&mut tokens, false);
        (tokens, errors)
    }

    /// Parse Markdown into a document tree with accumulated diagnostics.
    ///
    /// With the default configuration this never returns `Err`; critical
    /// failures yield an empty document plus the error list instead. Only
    /// `throw_on_error` escalates to `Err`.
    pub fn parse(&self, markdown: &str) -> Result<ConversionResult, ParserError> {
        let start = Instant::now();
        let mut result = ConversionResult {
            document: Node::doc(Vec::new()),
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: ParseStats::default(),
        };

        let input_errors = validate_input(markdown, &self.config);
        if !input_errors.is_empty() {
            result.errors.extend(input_errors);

            if let Some(critical) = result
                .errors
                .iter()
                .find(|error| self.config.is_critical(error.code))
            {
                if self.config.throw_on_error {
                    return Err(critical.clone());
                }
                // Critical input failure: empty document plus the errors.
                self.finish_stats(&mut result, start);
                return Ok(result);
            }
        }

        let mut tokens = tokenizer::tokenize(markdown, &self.options);
        if self.config.collect_stats {
            result.stats.token_count = tokens.len();
        }

        let pipeline_errors = self.pipeline.apply(&mut tokens, self.config.throw_on_error);
        result.errors.extend(pipeline_errors);
        if self.config.throw_on_error {
            if let Some(error) = result
                .errors
                .iter()
                .find(|error| error.code == ErrorCode::ExtensionError)
            {
                return Err(error.clone());
            }
        }

        let outcome = builder::build(&tokens);
        for defect in &outcome.defects {
            result.errors.push(ParserError::new(
                ErrorCode::ConversionError,
                format!("Malformed token stream: {defect}"),
            ));
        }
        if self.config.throw_on_error {
            if let Some(error) = result
                .errors
                .iter()
                .find(|error| error.code == ErrorCode::ConversionError)
            {
                return Err(error.clone());
            }
        }

        if self.config.validate_output {
            result.warnings.extend(doc::validate(&outcome.document));
        }

        result.document = outcome.document;
        self.finish_stats(&mut result, start);
        Ok(result)
    }

    /// Render a document tree back to Markdown source.
    ///
    /// The serializer is total; a failed reverse conversion is the
    /// integration caller's to report (see [`ErrorCode::SerializeError`]),
    /// and the input tree is never mutated.
    pub fn convert_to_markdown(&self, document: &Node) -> String {
        serializer::to_markdown(document)
    }

    fn finish_stats(&self, result: &mut ConversionResult, start: Instant) {
        if self.config.collect_stats {
            result.stats.parse_time_ms = start.elapsed().as_secs_f64() * 1000.0;
        }
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        MarkdownParser::with_defaults()
    }
}

/// Input validation: size cap (in characters) and null bytes. Both report
/// as `INVALID_MARKDOWN`, the default critical code.
fn validate_input(markdown: &str, config: &ParserConfig) -> Vec<ParserError> {
    let mut errors = Vec::new();

    let length = markdown.chars().count();
    if length > config.max_input_size {
        errors.push(
            ParserError::new(
                ErrorCode::InvalidMarkdown,
                format!(
                    "Markdown input exceeds maximum allowed size ({} characters)",
                    config.max_input_size
                ),
            )
            .with_details(format!("size: {length}")),
        );
    }

    if markdown.contains('\0') {
        errors.push(
            ParserError::new(ErrorCode::InvalidMarkdown, "Markdown contains null characters")
                .with_details("input contains null bytes which may break downstream parsing"),
        );
    }

    errors
}
