//! Shared configuration loader for the medmark toolchain.
//!
//! `defaults/medmark.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MedmarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use medmark_render::{ChatOptions, HtmlOptions, RenderOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/medmark.default.toml");

/// Top-level configuration consumed by medmark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MedmarkConfig {
    pub html: HtmlConfig,
    pub chat: ChatConfig,
}

/// Markdown → HTML conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub escape_html: bool,
}

/// Chat transcript knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    pub ai_senders: Vec<String>,
    pub message_field: String,
    pub fallback_field: String,
}

impl From<&HtmlConfig> for HtmlOptions {
    fn from(config: &HtmlConfig) -> Self {
        HtmlOptions {
            escape_html: config.escape_html,
        }
    }
}

impl From<&ChatConfig> for ChatOptions {
    fn from(config: &ChatConfig) -> Self {
        ChatOptions {
            ai_senders: config.ai_senders.clone(),
            message_field: config.message_field.clone(),
            fallback_field: config.fallback_field.clone(),
        }
    }
}

impl From<&MedmarkConfig> for RenderOptions {
    fn from(config: &MedmarkConfig) -> Self {
        RenderOptions {
            html: (&config.html).into(),
            chat: (&config.chat).into(),
        }
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
    pub fn build(self) -> Result<MedmarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MedmarkConfig, ConfigError> {
    Loader::new().build()
}
