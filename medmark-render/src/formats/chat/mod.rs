//! Chat transcript format
//!
//! Annotates AI-authored chat messages with a `formattedContent` field holding the HTML form of
//! their text. Human messages are left exactly as they are, and the output keeps the input's
//! order and length.
//!
//! A message counts as AI-authored when its `sender` is one of [`ChatOptions::ai_senders`]
//! (case-insensitive) or when it carries `"isUser": false`. The text is read from
//! [`ChatOptions::message_field`] (`message`), falling back to [`ChatOptions::fallback_field`]
//! (`content`) when the first is missing or empty.

use crate::error::FormatError;
use crate::format::{Format, OutputKind, RenderOptions};
use crate::formats::markdown::markdown_to_html_with;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const SENDER_FIELD: &str = "sender";
const IS_USER_FIELD: &str = "isUser";
const FORMATTED_FIELD: &str = "formattedContent";

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    Human,
    Ai,
}

/// Options for chat formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatOptions {
    /// Sender values that mark a message as AI-authored
    pub ai_senders: Vec<String>,
    /// Field holding the message text
    pub message_field: String,
    /// Field read when `message_field` is missing or empty
    pub fallback_field: String,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            ai_senders: vec!["ai".to_string()],
            message_field: "message".to_string(),
            fallback_field: "content".to_string(),
        }
    }
}

impl ChatOptions {
    fn classify(&self, sender: Option<&str>, is_user: Option<bool>) -> Author {
        let ai_sender = sender.is_some_and(|sender| {
            self.ai_senders
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(sender))
        });
        if ai_sender || is_user == Some(false) {
            Author::Ai
        } else {
            Author::Human
        }
    }
}

/// A chat message as delivered by the messaging API.
///
/// Only the fields the formatter looks at are typed; everything else is kept in `extra` and
/// written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(rename = "isUser", default, skip_serializing_if = "Option::is_none")]
    pub is_user: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(
        rename = "formattedContent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub formatted_content: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatMessage {
    pub fn author(&self, options: &ChatOptions) -> Author {
        options.classify(self.sender.as_deref(), self.is_user)
    }

    /// The message text: `message`, or `content` when `message` is missing or empty.
    pub fn text(&self) -> Option<&str> {
        pick_text(self.message.as_deref(), self.content.as_deref())
    }

    /// The message text read from the fields named in `options`.
    pub fn text_with(&self, options: &ChatOptions) -> Option<&str> {
        pick_text(
            self.field(&options.message_field),
            self.field(&options.fallback_field),
        )
    }

    /// A string field by its wire name, typed or kept in `extra`.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            SENDER_FIELD => self.sender.as_deref(),
            "message" => self.message.as_deref(),
            "content" => self.content.as_deref(),
            FORMATTED_FIELD => self.formatted_content.as_deref(),
            other => self.extra.get(other).and_then(Value::as_str),
        }
    }
}

fn pick_text<'a>(primary: Option<&'a str>, fallback: Option<&'a str>) -> Option<&'a str> {
    primary.filter(|text| !text.is_empty()).or(fallback)
}

/// Adds `formatted_content` to every AI-authored message, using default options.
///
/// `None` yields an empty list.
pub fn format_ai_chat_messages(messages: impl Into<Option<Vec<ChatMessage>>>) -> Vec<ChatMessage> {
    format_ai_chat_messages_with(messages, &RenderOptions::default())
}

/// Adds `formatted_content` to every AI-authored message.
pub fn format_ai_chat_messages_with(
    messages: impl Into<Option<Vec<ChatMessage>>>,
    options: &RenderOptions,
) -> Vec<ChatMessage> {
    let Some(messages) = messages.into() else {
        return Vec::new();
    };
    messages
        .into_iter()
        .map(|message| match message.author(&options.chat) {
            Author::Ai => {
                let formatted =
                    markdown_to_html_with(message.text_with(&options.chat), &options.html);
                ChatMessage {
                    formatted_content: Some(formatted),
                    ..message
                }
            }
            Author::Human => message,
        })
        .collect()
}

/// Applies the chat formatting rule to arbitrary JSON.
///
/// A non-array input yields `[]`. Elements that are not objects, and human-authored objects,
/// are copied unchanged; AI-authored objects keep every field and gain `formattedContent`.
pub fn format_ai_chat_value(value: &Value, options: &RenderOptions) -> Value {
    let Value::Array(items) = value else {
        return Value::Array(Vec::new());
    };
    let formatted = items
        .iter()
        .map(|item| match item {
            Value::Object(fields) if author_of(fields, &options.chat) == Author::Ai => {
                let text = pick_text(
                    fields.get(&options.chat.message_field).and_then(Value::as_str),
                    fields.get(&options.chat.fallback_field).and_then(Value::as_str),
                );
                let mut annotated = fields.clone();
                annotated.insert(
                    FORMATTED_FIELD.to_string(),
                    Value::String(markdown_to_html_with(text, &options.html)),
                );
                Value::Object(annotated)
            }
            other => other.clone(),
        })
        .collect();
    Value::Array(formatted)
}

fn author_of(fields: &Map<String, Value>, options: &ChatOptions) -> Author {
    options.classify(
        fields.get(SENDER_FIELD).and_then(Value::as_str),
        fields.get(IS_USER_FIELD).and_then(Value::as_bool),
    )
}

/// Format implementation for chat transcripts (JSON arrays of messages)
pub struct ChatFormat;

impl Format for ChatFormat {
    fn name(&self) -> &str {
        "chat"
    }

    fn description(&self) -> &str {
        "Chat transcript with AI replies annotated as HTML"
    }

    fn file_extensions(&self) -> &[&str] {
        &["chat.json"]
    }

    fn targets(&self) -> &[OutputKind] {
        &[OutputKind::Json]
    }

    fn convert(
        &self,
        source: &str,
        target: OutputKind,
        options: &RenderOptions,
    ) -> Result<String, FormatError> {
        if target != OutputKind::Json {
            return Err(self.unsupported_target(target));
        }
        let value: Value =
            serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))?;
        let formatted = format_ai_chat_value(&value, options);
        serde_json::to_string_pretty(&formatted)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
