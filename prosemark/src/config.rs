//! Parser configuration.
//!
//! Configuration is an explicit value constructed once at facade creation
//! and carried by value into every operation; there is no ambient or global
//! configuration anywhere in the crate.

use crate::error::ErrorCode;

/// Configuration applied at facade construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    /// Escalate critical errors to `Err` returns instead of carrying them
    /// in the result.
    pub throw_on_error: bool,
    /// Run the document validator over the built tree and attach warnings.
    pub validate_output: bool,
    /// Error codes that abort parsing immediately.
    pub critical_error_codes: Vec<ErrorCode>,
    /// Maximum input size, in characters.
    pub max_input_size: usize,
    /// Collect timing and token-count statistics.
    pub collect_stats: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            throw_on_error: false,
            validate_output: true,
            critical_error_codes: vec![ErrorCode::InvalidMarkdown],
            max_input_size: 500_000,
            collect_stats: true,
        }
    }
}

impl ParserConfig {
    pub fn is_critical(&self, code: ErrorCode) -> bool {
        self.critical_error_codes.contains(&code)
    }
}
