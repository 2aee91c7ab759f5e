//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! A format names one kind of input (markdown text, a JSON object, a chat transcript) and the
//! output kinds it can be converted to.

use crate::error::FormatError;
use crate::formats::chat::ChatOptions;
use crate::formats::markdown::HtmlOptions;
use std::fmt;
use std::str::FromStr;

/// Kinds of output a conversion can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    Html,
    Markdown,
    Json,
}

impl OutputKind {
    pub const ALL: [OutputKind; 3] = [OutputKind::Html, OutputKind::Markdown, OutputKind::Json];

    pub fn name(self) -> &'static str {
        match self {
            OutputKind::Html => "html",
            OutputKind::Markdown => "markdown",
            OutputKind::Json => "json",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputKind {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(OutputKind::Html),
            "markdown" | "md" => Ok(OutputKind::Markdown),
            "json" => Ok(OutputKind::Json),
            other => Err(FormatError::NotSupported(format!(
                "Unknown output kind '{other}'"
            ))),
        }
    }
}

/// Options shared by every format
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub html: HtmlOptions,
    pub chat: ChatOptions,
}

/// Trait for document formats
///
/// Implementors convert source text of their kind into one or more [`OutputKind`]s.
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Format for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn targets(&self) -> &[OutputKind] {
///         &[OutputKind::Markdown]
///     }
///
///     fn convert(&self, source: &str, _target: OutputKind, _options: &RenderOptions)
///         -> Result<String, FormatError> {
///         Ok(source.to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "object", "chat")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["md", "markdown"], ["chat.json"])
    ///
    /// Extensions are given without the leading dot and may contain dots themselves.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Output kinds this format converts to
    fn targets(&self) -> &[OutputKind] {
        &[]
    }

    /// Whether this format converts to `target`
    fn supports(&self, target: OutputKind) -> bool {
        self.targets().contains(&target)
    }

    /// Convert source text into `target`
    ///
    /// Default implementation returns NotSupported error.
    fn convert(
        &self,
        _source: &str,
        target: OutputKind,
        _options: &RenderOptions,
    ) -> Result<String, FormatError> {
        Err(self.unsupported_target(target))
    }

    /// Error for a conversion this format does not offer
    fn unsupported_target(&self, target: OutputKind) -> FormatError {
        FormatError::NotSupported(format!(
            "Format '{}' cannot be converted to {target}",
            self.name()
        ))
    }
}
