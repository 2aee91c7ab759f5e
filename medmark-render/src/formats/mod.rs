//! Format implementations
//!
//! Each format names one kind of input and converts it to the output kinds it supports.

pub mod chat;
pub mod markdown;
pub mod object;
pub mod results;

pub use chat::{ChatFormat, ChatMessage, ChatOptions};
pub use markdown::{HtmlOptions, MarkdownFormat};
pub use object::ObjectFormat;
pub use results::ResultsFormat;
