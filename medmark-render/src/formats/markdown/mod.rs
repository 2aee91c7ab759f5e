//! Markdown format implementation
//!
//! Converts the small markdown dialect used by AI answers and pathologist notes into HTML.
//!
//! # Element Mapping Table
//!
//! | Markdown             | HTML                        | Notes                                        |
//! |----------------------|-----------------------------|----------------------------------------------|
//! | blank line(s)        | `</p><p>`                   | the whole text is wrapped in `<p>` once      |
//! | `**bold**`           | `<strong>`                  | single line, non-greedy                      |
//! | `*italic*`           | `<em>`                      | not when the `*` starts a line               |
//! | `* item` / `- item`  | `<ul><li>`                  | one list per document, closed at the end     |
//! | `1. item`            | `<ol><li>`                  | same model as unordered lists                |
//! | `# ` / `## ` / `### `| `<h3>` / `<h4>` / `<h5>`    | shifted down so page titles stay above       |
//! | newline              | `<br>`                      |                                              |
//!
//! Nothing else is recognized: links, code spans, tables and nesting are plain text.
//!
//! # Escaping
//!
//! The converter does not escape HTML unless [`HtmlOptions::escape_html`] is set. Text that may
//! come from patients or other untrusted sources should be converted with escaping on.

mod html;

pub use html::{markdown_to_html, markdown_to_html_with};

use crate::error::FormatError;
use crate::format::{Format, OutputKind, RenderOptions};

/// Options for markdown → HTML conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Escape `& < > " '` in the raw text before any markup is applied
    pub escape_html: bool,
}

/// Format implementation for markdown text
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown subset (bold, italic, lists, headers)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown", "txt"]
    }

    fn targets(&self) -> &[OutputKind] {
        &[OutputKind::Html]
    }

    fn convert(
        &self,
        source: &str,
        target: OutputKind,
        options: &RenderOptions,
    ) -> Result<String, FormatError> {
        match target {
            OutputKind::Html => Ok(markdown_to_html_with(source, &options.html)),
            other => Err(self.unsupported_target(other)),
        }
    }
}
