//! Shared configuration loader for the strux toolchain.
//!
//! `defaults/strux.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`StruxConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/strux.default.toml");

/// Top-level configuration consumed by strux applications.
#[derive(Debug, Clone, Deserialize)]
pub struct StruxConfig {
    pub convert: ConvertConfig,
}

/// Per-format conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub text: TextConfig,
    pub json: JsonConfig,
}

/// Structured-text output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct TextConfig {
    /// Spaces per nesting level; must be at least 1.
    pub indent_width: usize,
}

/// JSON output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfig {
    /// Spaces per nesting level; must be at least 1.
    pub indent: usize,
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
    pub fn build(self) -> Result<StruxConfig, ConfigError> {
        let cfg: StruxConfig = self.builder.build()?.try_deserialize()?;
        if cfg.convert.text.indent_width == 0 {
            return Err(ConfigError::Message(
                "convert.text.indent_width must be at least 1".to_string(),
            ));
        }
        if cfg.convert.json.indent == 0 {
            return Err(ConfigError::Message(
                "convert.json.indent must be at least 1".to_string(),
            ));
        }
        Ok(cfg)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<StruxConfig, ConfigError> {
    Loader::new().build()
}
