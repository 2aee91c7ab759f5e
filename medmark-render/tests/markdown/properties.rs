//! Properties that hold for any input.

use medmark_render::{markdown_to_html, markdown_to_html_with, HtmlOptions};
use proptest::prelude::*;

// Biased towards the characters the converter reacts to
const MARKDOWNISH: &str = "[a-z*#0-9. \n<>_-]{0,80}";

proptest! {
    #[test]
    fn conversion_is_deterministic(text in MARKDOWNISH) {
        prop_assert_eq!(markdown_to_html(text.as_str()), markdown_to_html(text.as_str()));
    }

    #[test]
    fn output_is_empty_only_for_empty_input(text in MARKDOWNISH) {
        prop_assert_eq!(markdown_to_html(text.as_str()).is_empty(), text.is_empty());
    }

    #[test]
    fn no_newline_survives(text in MARKDOWNISH) {
        prop_assert!(!markdown_to_html(text.as_str()).contains('\n'));
    }

    #[test]
    fn escaped_output_never_opens_script(text in "(<script>|[a-z*<>/ \n])*") {
        let options = HtmlOptions { escape_html: true };
        prop_assert!(!markdown_to_html_with(text.as_str(), &options).contains("<script"));
    }

    #[test]
    fn plain_words_are_wrapped_once(text in "[a-z][a-z ]{0,40}") {
        prop_assert_eq!(markdown_to_html(text.as_str()), format!("<p>{text}</p>"));
    }
}
