//! Shared configuration loader for the prosemark toolchain.
//!
//! `defaults/prosemark.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`ProsemarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use prosemark::{ErrorCode, ParserConfig};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/prosemark.default.toml");

/// Top-level configuration consumed by prosemark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ProsemarkConfig {
    pub parser: ParserSettings,
}

/// Mirrors the knobs exposed by the conversion facade.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserSettings {
    pub throw_on_error: bool,
    pub validate_output: bool,
    pub critical_error_codes: Vec<String>,
    pub max_input_size: usize,
    pub collect_stats: bool,
}

impl ParserSettings {
    /// Critical codes parsed into the library taxonomy. Codes the library
    /// does not know are dropped here; they could only ever match nothing.
    fn critical_codes(&self) -> Vec<ErrorCode> {
        self.critical_error_codes
            .iter()
            .filter_map(|code| code.parse().ok())
            .collect()
    }
}

impl From<&ParserSettings> for ParserConfig {
    fn from(settings: &ParserSettings) -> Self {
        ParserConfig {
            throw_on_error: settings.throw_on_error,
            validate_output: settings.validate_output,
            critical_error_codes: settings.critical_codes(),
            max_input_size: settings.max_input_size,
            collect_stats: settings.collect_stats,
        }
    }
}

impl From<ParserSettings> for ParserConfig {
    fn from(settings: ParserSettings) -> Self {
        (&settings).into()
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ProsemarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ProsemarkConfig, ConfigError> {
    Loader::new().build()
}
