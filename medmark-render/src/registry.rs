//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use crate::error::FormatError;
use crate::format::{Format, OutputKind, RenderOptions};
use std::collections::HashMap;
use tracing::debug;

/// Registry of formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let html = registry.convert("**hi**", "markdown", OutputKind::Html, &RenderOptions::default())?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on its extension
    ///
    /// Extensions may span several dots (`chat.json`), so the longest registered extension that
    /// ends the filename wins: `visit.chat.json` is a chat, `visit.json` an object.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let filename = std::path::Path::new(filename)
            .file_name()
            .and_then(|name| name.to_str())?;

        let mut best: Option<(usize, &str)> = None;
        for format in self.formats.values() {
            for ext in format.file_extensions() {
                let has_extension = filename
                    .strip_suffix(*ext)
                    .and_then(|stem| stem.strip_suffix('.'))
                    .is_some_and(|stem| !stem.is_empty());
                if has_extension && best.map_or(true, |(len, _)| ext.len() > len) {
                    best = Some((ext.len(), format.name()));
                }
            }
        }

        best.map(|(_, name)| name.to_string())
    }

    /// Convert source text from one format into an output kind
    pub fn convert(
        &self,
        source: &str,
        from: &str,
        to: OutputKind,
        options: &RenderOptions,
    ) -> Result<String, FormatError> {
        let fmt = self.get(from)?;
        if !fmt.supports(to) {
            return Err(fmt.unsupported_target(to));
        }
        debug!(from, to = %to, bytes = source.len(), "converting");
        fmt.convert(source, to, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::markdown::MarkdownFormat);
        registry.register(crate::formats::object::ObjectFormat);
        registry.register(crate::formats::chat::ChatFormat);
        registry.register(crate::formats::results::ResultsFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
