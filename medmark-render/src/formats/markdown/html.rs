//! Markdown subset to HTML rewriting
//!
//!     The conversion is a fixed sequence of regex passes over the whole text. Each pass sees the
//!     output of the one before it, so the order is part of the contract:
//!
//!     1. paragraph breaks   `\n\n+`            → `</p><p>`
//!     2. bold               `**x**`            → `<strong>x</strong>`
//!     3. italic             `*x*`              → `<em>x</em>`, never at line start
//!     4. unordered lists    `* x` / `- x`      → `<ul><li>x</li>` ... `</ul>`
//!     5. ordered lists      `1. x`             → `<ol><li>x</li>` ... `</ol>`
//!     6. headers            `#`, `##`, `###`   → `<h3>`, `<h4>`, `<h5>`
//!     7. top-level `<p>` wrap unless the text already opens with a block tag
//!     8. remaining `\n`     → `<br>`
//!
//!     This is not a markdown parser. Lists are a single open/close pair per list kind for the
//!     whole document, and a header that follows a paragraph break is no longer at the start of
//!     a line, so it stays literal text. Callers rely on exactly this output, so these quirks are
//!     kept as they are.
//!
//!     `\r` is not normalized. Line patterns end before a `\r\n`, so the `\r` stays outside
//!     the generated tags and only the `\n` becomes `<br>`.

use super::HtmlOptions;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("paragraph break pattern"));

// Line-based patterns run in CRLF mode: `$` stops before `\r\n` and `.` never matches `\r`.
static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?R)\*\*(.*?)\*\*").expect("bold pattern"));

// A leading `*` at the start of the text or of a line is a bullet, not emphasis. The
// preceding character is captured and written back.
static ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^\n])\*([^*\n]+)\*").expect("italic pattern"));

static UNORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^\s*[*-]\s+(.*)$").expect("unordered item pattern"));

static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^\s*[0-9]+\.\s+(.*)$").expect("ordered item pattern"));

// Each header pattern needs a space right after its markers, so `#` never matches `##`.
static HEADER_ONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^# (.*)$").expect("h1 pattern"));
static HEADER_TWO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^## (.*)$").expect("h2 pattern"));
static HEADER_THREE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^### (.*)$").expect("h3 pattern"));

/// Inline tags this converter emits itself. Text opening with one of these still gets wrapped.
const INLINE_OPENERS: &[&str] = &["<strong>", "<em>"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    Closed,
    Open,
}

/// Converts markdown text to HTML with default options.
///
/// Accepts `&str` or `Option<&str>`; `None` and `""` both produce an empty string.
pub fn markdown_to_html<'a>(text: impl Into<Option<&'a str>>) -> String {
    markdown_to_html_with(text, &HtmlOptions::default())
}

/// Converts markdown text to HTML.
///
/// Never fails: malformed markup is passed through as best-effort HTML.
pub fn markdown_to_html_with<'a>(
    text: impl Into<Option<&'a str>>,
    options: &HtmlOptions,
) -> String {
    let text = match text.into() {
        Some(text) if !text.is_empty() => text,
        _ => return String::new(),
    };

    let escaped;
    let source = if options.escape_html {
        escaped = escape_html(text);
        escaped.as_str()
    } else {
        text
    };

    let html = PARAGRAPH_BREAK.replace_all(source, "</p><p>").into_owned();
    let html = BOLD.replace_all(&html, "<strong>${1}</strong>").into_owned();
    let html = ITALIC.replace_all(&html, "${1}<em>${2}</em>").into_owned();
    let html = wrap_list_items(&html, &UNORDERED_ITEM, "ul");
    let html = wrap_list_items(&html, &ORDERED_ITEM, "ol");
    let html = HEADER_ONE.replace_all(&html, "<h3>${1}</h3>").into_owned();
    let html = HEADER_TWO.replace_all(&html, "<h4>${1}</h4>").into_owned();
    let html = HEADER_THREE.replace_all(&html, "<h5>${1}</h5>").into_owned();

    let html = if opens_with_block(&html) {
        html
    } else {
        format!("<p>{html}</p>")
    };

    html.replace('\n', "<br>")
}

/// Rewrites every line matched by `item` as a list item.
///
/// The first match opens the list, later matches only add `<li>` elements, and the closing
/// tag goes at the very end of the text.
fn wrap_list_items(text: &str, item: &Regex, tag: &str) -> String {
    let mut state = ListState::Closed;
    let mut html = item
        .replace_all(text, |caps: &Captures<'_>| {
            let body = &caps[1];
            match state {
                ListState::Closed => {
                    state = ListState::Open;
                    format!("<{tag}><li>{body}</li>")
                }
                ListState::Open => format!("<li>{body}</li>"),
            }
        })
        .into_owned();

    if state == ListState::Open {
        html.push_str("</");
        html.push_str(tag);
        html.push('>');
    }
    html
}

fn opens_with_block(html: &str) -> bool {
    html.starts_with('<') && !INLINE_OPENERS.iter().any(|tag| html.starts_with(tag))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
