//! Error types for format operations
//!
//! The formatter functions themselves never fail. Errors only come from the
//! outer layer: looking up formats, decoding JSON input and encoding output.

use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Input could not be decoded for the source format
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Output could not be encoded
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested target or option
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}
