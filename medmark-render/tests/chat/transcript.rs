//! Chat transcripts: AI replies gain `formattedContent`, everything else is untouched.

use medmark_render::{
    format_ai_chat_messages, format_ai_chat_messages_with, markdown_to_html, ChatMessage,
    ChatOptions, FormatError, FormatRegistry, OutputKind, RenderOptions,
};
use serde_json::{json, Value};

fn transcript() -> Vec<ChatMessage> {
    serde_json::from_value(json!([
        {"id": 1, "sender": "user", "message": "What does my **CBC** say?"},
        {"id": 2, "sender": "ai", "message": "Your results:\n* Hb normal\n* WBC normal"},
        {"id": 3, "isUser": false, "content": "**Reminder:** fast before the test"}
    ]))
    .unwrap()
}

#[test]
fn test_empty_and_absent() {
    assert_eq!(format_ai_chat_messages(Vec::new()), Vec::<ChatMessage>::new());
    assert_eq!(format_ai_chat_messages(None), Vec::<ChatMessage>::new());
}

#[test]
fn test_one_to_one_mapping() {
    let input = transcript();
    let output = format_ai_chat_messages(input.clone());

    assert_eq!(output.len(), input.len());
    for (before, after) in input.iter().zip(&output) {
        assert_eq!(before.extra.get("id"), after.extra.get("id"));
    }
}

#[test]
fn test_only_ai_messages_are_annotated() {
    let output = format_ai_chat_messages(transcript());

    assert_eq!(output[0], transcript()[0]);
    assert_eq!(
        output[1].formatted_content.as_deref(),
        Some(markdown_to_html("Your results:\n* Hb normal\n* WBC normal").as_str())
    );
    assert_eq!(
        output[2].formatted_content.as_deref(),
        Some("<p><strong>Reminder:</strong> fast before the test</p>")
    );
}

#[test]
fn test_custom_ai_senders() {
    let options = RenderOptions {
        chat: ChatOptions {
            ai_senders: vec!["assistant".to_string()],
            ..ChatOptions::default()
        },
        ..RenderOptions::default()
    };
    let messages: Vec<ChatMessage> = serde_json::from_value(json!([
        {"sender": "assistant", "message": "hi"},
        {"sender": "ai", "message": "hi"}
    ]))
    .unwrap();

    let output = format_ai_chat_messages_with(messages, &options);
    assert!(output[0].formatted_content.is_some());
    assert!(output[1].formatted_content.is_none());
}

#[test]
fn test_chat_format_through_registry() {
    let registry = FormatRegistry::default();
    let source =
        r#"[{"sender": "ai", "message": "**hi**"}, {"sender": "user", "message": "hello"}]"#;
    let output = registry
        .convert(source, "chat", OutputKind::Json, &RenderOptions::default())
        .unwrap();

    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        value,
        json!([
            {"sender": "ai", "message": "**hi**", "formattedContent": "<p><strong>hi</strong></p>"},
            {"sender": "user", "message": "hello"}
        ])
    );
}

#[test]
fn test_chat_format_non_array_yields_empty_array() {
    let registry = FormatRegistry::default();
    let output = registry
        .convert("null", "chat", OutputKind::Json, &RenderOptions::default())
        .unwrap();
    assert_eq!(output, "[]");
}

#[test]
fn test_chat_format_invalid_json() {
    let registry = FormatRegistry::default();
    let result = registry.convert("[{", "chat", OutputKind::Json, &RenderOptions::default());
    assert!(matches!(result, Err(FormatError::ParseError(_))));
}

#[test]
fn test_chat_format_reads_configured_field() {
    let registry = FormatRegistry::default();
    let options = RenderOptions {
        chat: ChatOptions {
            message_field: "text".to_string(),
            ..ChatOptions::default()
        },
        ..RenderOptions::default()
    };
    let output = registry
        .convert(r#"[{"sender":"ai","text":"**hi**"}]"#, "chat", OutputKind::Json, &options)
        .unwrap();

    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value[0]["formattedContent"], "<p><strong>hi</strong></p>");
}
