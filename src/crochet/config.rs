//! Configuration loading
//!
//! `defaults/stitchwork.default.toml` is embedded into the binary so that documentation and
//! runtime behavior stay in sync. Callers layer user files and single-key overrides on top of
//! those defaults via [`Loader`] before deserializing into [`StitchworkConfig`].

use crate::crochet::lexing::TokenizerOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/stitchwork.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StitchworkConfig {
    pub tokenizer: TokenizerOptions,
    pub output: OutputConfig,
    pub repl: ReplConfig,
    pub logging: LoggingConfig,
}

/// How display tokens of a line are joined for printing
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub leading: String,
    pub separator: String,
}

impl OutputConfig {
    pub fn join(&self, displays: &[String]) -> String {
        format!("{}{}", self.leading, displays.join(&self.separator))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplConfig {
    pub prompt: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
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

    /// Apply a single key/value override (useful for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<StitchworkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<StitchworkConfig, ConfigError> {
    Loader::new().build()
}
