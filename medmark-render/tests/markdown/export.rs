//! Markdown → HTML conversion, checked against the exact strings the UI renders.

use insta::assert_snapshot;
use medmark_render::{markdown_to_html, markdown_to_html_with, HtmlOptions};

#[test]
fn test_absent_and_empty_input() {
    assert_eq!(markdown_to_html(None), "");
    assert_eq!(markdown_to_html(""), "");
}

#[test]
fn test_bold() {
    assert_snapshot!(markdown_to_html("**bold**"), @"<p><strong>bold</strong></p>");
}

#[test]
fn test_italic() {
    assert_snapshot!(markdown_to_html("take it *slowly*"), @"<p>take it <em>slowly</em></p>");
    // A leading `*` is a bullet candidate, never emphasis
    assert_snapshot!(markdown_to_html("*italic*"), @"<p>*italic*</p>");
    assert_snapshot!(markdown_to_html("Take\n*daily* dose"), @"<p>Take<br>*daily* dose</p>");
}

#[test]
fn test_headers_are_shifted_down() {
    assert_snapshot!(markdown_to_html("# Title"), @"<h3>Title</h3>");
    assert_snapshot!(markdown_to_html("## Section"), @"<h4>Section</h4>");
    assert_snapshot!(markdown_to_html("### Detail"), @"<h5>Detail</h5>");
    assert_snapshot!(markdown_to_html("# Title\nBody"), @"<h3>Title</h3><br>Body");
}

#[test]
fn test_unordered_list() {
    let html = markdown_to_html("* item one\n* item two");
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 2);
    assert!(html.ends_with("</ul>"));
    assert_snapshot!(html, @"<ul><li>item one</li><br><li>item two</li></ul>");
}

#[test]
fn test_dash_bullets() {
    assert_snapshot!(markdown_to_html("- a\n- b"), @"<ul><li>a</li><br><li>b</li></ul>");
}

#[test]
fn test_ordered_list() {
    assert_snapshot!(
        markdown_to_html("1. first\n2. second"),
        @"<ol><li>first</li><br><li>second</li></ol>"
    );
}

#[test]
fn test_list_after_text_is_wrapped_in_paragraph() {
    assert_snapshot!(
        markdown_to_html("Intro\n* a\n* b"),
        @"<p>Intro<br><ul><li>a</li><br><li>b</li></ul></p>"
    );
}

#[test]
fn test_mixed_lists_close_at_the_end() {
    assert_snapshot!(
        markdown_to_html("- a\n1. b"),
        @"<ul><li>a</li><br><ol><li>b</ul></li></ol>"
    );
}

#[test]
fn test_line_breaks_and_paragraphs() {
    assert_snapshot!(markdown_to_html("line one\nline two"), @"<p>line one<br>line two</p>");
    assert_snapshot!(markdown_to_html("para one\n\npara two"), @"<p>para one</p><p>para two</p>");
    assert_snapshot!(markdown_to_html("a\n\n\n\nb"), @"<p>a</p><p>b</p>");
}

#[test]
fn test_unbalanced_markers_pass_through() {
    assert_snapshot!(markdown_to_html("x**y"), @"<p>x**y</p>");
    assert_snapshot!(markdown_to_html("2 * 3 * 4"), @"<p>2 <em> 3 </em> 4</p>");
}

#[test]
fn test_ai_answer() {
    let answer = "# Lab Summary\n\
                  Your **hemoglobin** is *slightly* low.\n\n\
                  * Eat iron-rich food\n\
                  * Recheck in 2 weeks";
    assert_snapshot!(
        markdown_to_html(answer),
        @"<h3>Lab Summary</h3><br>Your <strong>hemoglobin</strong> is <em>slightly</em> low.</p><p>* Eat iron-rich food<br><ul><li>Recheck in 2 weeks</li></ul>"
    );
}

#[test]
fn test_escaping_untrusted_text() {
    let options = HtmlOptions { escape_html: true };
    assert_snapshot!(
        markdown_to_html_with("**<img src=x onerror=alert(1)>**", &options),
        @"<p><strong>&lt;img src=x onerror=alert(1)&gt;</strong></p>"
    );
}
