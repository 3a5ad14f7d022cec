//! Error types for the docquery crate.
//!
//! Filter compilation itself never fails: malformed groups are dropped.
//! The errors here cover decoding the raw query string, marshalling
//! values into documents, and loading configuration.

use thiserror::Error;

/// Errors that can occur when decoding input or building documents.
#[derive(Debug, Error)]
pub enum CriteriaError {
    /// A `%` escape in the raw query is not followed by two hex digits.
    #[error("invalid URL escape {escape:?}")]
    InvalidEscape { escape: String },

    /// The raw query uses `;` as a separator.
    #[error("invalid semicolon separator in query")]
    InvalidSeparator,

    /// A decoded query component is not valid UTF-8.
    #[error("query component is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A value could not be converted into a document.
    #[error("failed to marshal document: {0}")]
    Marshal(#[from] serde_json::Error),

    /// Configuration text could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for docquery operations.
pub type Result<T> = std::result::Result<T, CriteriaError>;
