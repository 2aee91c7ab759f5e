//! Structured object format
//!
//! Renders a JSON key/value mapping (test-result parameters, visit summaries) as markdown, one
//! bold label per key, ready to be fed to the markdown converter.
//!
//! | Value            | Markdown                                          |
//! |------------------|---------------------------------------------------|
//! | null, `""`       | skipped                                           |
//! | scalar           | `**Label:** value` + blank line                   |
//! | sequence         | `**Label:**`, one `* item` line each, blank line  |
//! | sequence mapping | `* key: value, key: value` (no further nesting)   |
//! | mapping          | `**Label:**`, the mapping rendered recursively, blank line |
//!
//! Keys are visited in insertion order, which is why the workspace enables serde_json's
//! `preserve_order` feature.

mod text;

use crate::error::FormatError;
use crate::format::{Format, OutputKind, RenderOptions};
use crate::formats::markdown::{markdown_to_html_with, HtmlOptions};
use serde_json::{Map, Value};
use text::{display_value, humanize_key};

/// Renders a structured object as markdown.
///
/// Anything that is not a mapping, including `None` and `Value::Null`, renders as `""`.
pub fn object_to_markdown<'a>(value: impl Into<Option<&'a Value>>) -> String {
    let mut markdown = String::new();
    if let Some(Value::Object(map)) = value.into() {
        render_mapping(map, &mut markdown);
    }
    markdown
}

/// Renders a structured object as markdown and converts the result to HTML.
pub fn object_to_html<'a>(value: impl Into<Option<&'a Value>>, options: &HtmlOptions) -> String {
    markdown_to_html_with(object_to_markdown(value).as_str(), options)
}

fn render_mapping(map: &Map<String, Value>, out: &mut String) {
    for (key, value) in map {
        let label = humanize_key(key);
        match value {
            Value::Null => {}
            Value::String(text) if text.is_empty() => {}
            Value::Array(items) => {
                out.push_str(&format!("**{label}:**\n"));
                for item in items {
                    let line = match item {
                        Value::Object(fields) => inline_pairs(fields),
                        other => display_value(other),
                    };
                    out.push_str(&format!("* {line}\n"));
                }
                out.push('\n');
            }
            Value::Object(nested) => {
                out.push_str(&format!("**{label}:**\n"));
                render_mapping(nested, out);
                out.push('\n');
            }
            scalar @ (Value::Bool(_) | Value::Number(_) | Value::String(_)) => {
                out.push_str(&format!("**{label}:** {}\n\n", display_value(scalar)));
            }
        }
    }
}

/// `{"name": "Hb", "value": 13.5}` → `name: Hb, value: 13.5`
fn inline_pairs(fields: &Map<String, Value>) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{key}: {}", display_value(value)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format implementation for JSON objects
pub struct ObjectFormat;

impl Format for ObjectFormat {
    fn name(&self) -> &str {
        "object"
    }

    fn description(&self) -> &str {
        "JSON key/value object rendered as labelled markdown"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn targets(&self) -> &[OutputKind] {
        &[OutputKind::Markdown, OutputKind::Html]
    }

    fn convert(
        &self,
        source: &str,
        target: OutputKind,
        options: &RenderOptions,
    ) -> Result<String, FormatError> {
        let value: Value =
            serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))?;
        match target {
            OutputKind::Markdown => Ok(object_to_markdown(&value)),
            OutputKind::Html => Ok(object_to_html(&value, &options.html)),
            other => Err(self.unsupported_target(other)),
        }
    }
}
