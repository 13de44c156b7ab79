//! Error types for conversion diagnostics and format operations

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Stable taxonomy of conversion diagnostics.
///
/// Codes serialize in SCREAMING_SNAKE_CASE so that result envelopes are
/// stable across releases regardless of variant naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Malformed, oversized or unsafe Markdown input.
    InvalidMarkdown,
    /// A pipeline extension failed during post-processing.
    ExtensionError,
    /// The built document tree violates a shape invariant.
    ValidationError,
    /// Reserved: the tree builder currently skips unrecognized tokens
    /// silently instead of reporting them.
    UnknownToken,
    /// The token stream could not be converted into a document tree.
    ConversionError,
    /// Reserved for integration callers reporting failures in the
    /// tree-to-Markdown direction; the serializer itself is total.
    SerializeError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidMarkdown => "INVALID_MARKDOWN",
            ErrorCode::ExtensionError => "EXTENSION_ERROR",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::UnknownToken => "UNKNOWN_TOKEN",
            ErrorCode::ConversionError => "CONVERSION_ERROR",
            ErrorCode::SerializeError => "SERIALIZE_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "INVALID_MARKDOWN" => Ok(ErrorCode::InvalidMarkdown),
            "EXTENSION_ERROR" => Ok(ErrorCode::ExtensionError),
            "VALIDATION_ERROR" => Ok(ErrorCode::ValidationError),
            "UNKNOWN_TOKEN" => Ok(ErrorCode::UnknownToken),
            "CONVERSION_ERROR" => Ok(ErrorCode::ConversionError),
            "SERIALIZE_ERROR" => Ok(ErrorCode::SerializeError),
            other => Err(format!("unknown error code '{other}'")),
        }
    }
}

/// A single diagnostic produced during conversion.
///
/// Diagnostics are result-carried: the facade accumulates them in the
/// conversion result instead of letting failures escape, unless explicitly
/// configured to escalate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParserError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(rename = "extensionName", skip_serializing_if = "Option::is_none")]
    pub extension_name: Option<String>,
}

impl ParserError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ParserError {
            code,
            message: message.into(),
            details: None,
            extension_name: None,
        }
    }

    /// Attach extra context that is useful for debugging but not for display.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Diagnostic for a failing pipeline extension, tagged with its name.
    pub fn for_extension(name: &str, message: impl fmt::Display) -> Self {
        ParserError {
            code: ErrorCode::ExtensionError,
            message: format!("Extension '{name}' failed during post-processing: {message}"),
            details: None,
            extension_name: Some(name.to_string()),
        }
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ParserError {}

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during parsing
    ParseError(String),
    /// Error during serialization
    SerializationError(String),
    /// Format does not support the requested direction
    NotSupported(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}
