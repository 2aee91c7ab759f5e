//! Rendering of clinical text for display
//!
//!     This crate turns the text a care platform shows its users into HTML: answers from the AI
//!     assistant, pathologist notes, test-result parameters and chat transcripts. It is a pure
//!     lib, that is, no code here reads files, environment variables or prints; the medmark-cli
//!     crate is the shell around it.
//!
//! Operations
//!
//!     - [`markdown_to_html`]: a small markdown dialect → HTML (see ./formats/markdown/html.rs for
//!       the pass order, which is part of the output contract).
//!     - [`object_to_markdown`]: a JSON key/value object → labelled markdown.
//!     - [`format_ai_chat_messages`]: annotate AI-authored chat messages with their HTML.
//!
//!     None of them fail. Empty, absent or malformed input degrades to empty or best-effort
//!     output.
//!
//! Formats
//!
//!     To drive the operations from files, each input kind is also a [`Format`] registered in the
//!     [`FormatRegistry`]:
//!
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait, OutputKind, RenderOptions
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     └── formats
//!         ├── markdown            # markdown → html
//!         ├── object              # json object → markdown | html
//!         ├── chat                # chat transcript → json
//!         └── results             # test report → markdown | html
//!
//! Testing
//!
//!     tests
//!     └── <format>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so tests/lib.rs
//!     includes these as modules.

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::{Format, OutputKind, RenderOptions};
pub use formats::chat::{
    format_ai_chat_messages, format_ai_chat_messages_with, format_ai_chat_value, Author,
    ChatMessage, ChatOptions,
};
pub use formats::markdown::{markdown_to_html, markdown_to_html_with, HtmlOptions};
pub use formats::object::{object_to_html, object_to_markdown};
pub use formats::results::{RangeStatus, ReferenceRange, TestParameter, TestReport};
pub use registry::FormatRegistry;
