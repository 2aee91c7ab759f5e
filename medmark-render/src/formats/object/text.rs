//! String forms for keys and values of structured objects.

use serde_json::{Number, Value};

/// Turns a snake_case key into a display label: `patient_name` → `Patient Name`.
///
/// Underscores become spaces, then every ASCII letter that starts a word is upper-cased. A word
/// starts after any character that is not an ASCII letter or digit.
pub(crate) fn humanize_key(key: &str) -> String {
    let mut label = String::with_capacity(key.len());
    let mut in_word = false;
    for ch in key.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        let is_word = ch.is_ascii_alphanumeric();
        if is_word && !in_word {
            label.push(ch.to_ascii_uppercase());
        } else {
            label.push(ch);
        }
        in_word = is_word;
    }
    label
}

/// Loose string form of a value, as a script engine would print it.
///
/// Integral floats print without a fraction, sequences print comma-joined and nested mappings
/// print as compact JSON.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => display_number(number),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

fn display_number(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() && float.is_finite() && float.fract() == 0.0 => {
            if float == 0.0 {
                "0".to_string()
            } else if float.abs() < 1e21 {
                format!("{float:.0}")
            } else {
                number.to_string()
            }
        }
        _ => number.to_string(),
    }
}
