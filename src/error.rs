//! Unified error types for kakaopack.
//!
//! This module provides a single [`KakaopackError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! Malformed *chat content* is never an error: unparseable lines become
//! continuations or are dropped, and an unrecognizable file parses to an
//! empty [`ParsedChat`](crate::parser::ParsedChat). Errors are reserved for
//! I/O failures, JSON serialization, and caller-side validation (an empty
//! chat, too few participants) surfaced by the CLI.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for kakaopack operations.
///
/// # Example
///
/// ```rust
/// use kakaopack::error::Result;
/// use kakaopack::ChatMessage;
///
/// fn my_function() -> Result<Vec<ChatMessage>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, KakaopackError>;

/// The error type for all kakaopack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KakaopackError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    ///
    /// Can occur when writing the analysis request or statistics payloads.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input doesn't contain a usable KakaoTalk conversation.
    ///
    /// The parser itself never raises this; it returns an empty
    /// [`ParsedChat`](crate::parser::ParsedChat) instead. Callers that need
    /// a conversation (the CLI, a UI layer) inspect the parse result and
    /// raise this as their validation error.
    #[error("Invalid KakaoTalk export: {message}")]
    InvalidChat {
        /// Description of what's wrong
        message: String,
    },
}

impl KakaopackError {
    /// Creates an [`InvalidChat`](KakaopackError::InvalidChat) error.
    pub fn invalid_chat(message: impl Into<String>) -> Self {
        KakaopackError::InvalidChat {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_chat_display() {
        let err = KakaopackError::invalid_chat("no messages found");
        assert_eq!(
            err.to_string(),
            "Invalid KakaoTalk export: no messages found"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: KakaopackError = io_err.into();
        assert!(matches!(err, KakaopackError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: KakaopackError = json_err.into();
        assert!(matches!(err, KakaopackError::Json(_)));
    }
}
