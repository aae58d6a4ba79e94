//! Error types for webhook delivery

use thiserror::Error;

/// Errors that can occur while talking to the webhook
///
/// Non-2xx responses are not errors; they come back as
/// [`WebhookResult::Failure`](crate::types::WebhookResult::Failure).
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Network or connection failure
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Voice file missing or unreadable
    #[error("Cannot read audio file {path}: {source}")]
    FileAccess {
        /// Path that could not be read
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The webhook answered 2xx with a body that is not valid JSON
    #[error("Invalid JSON in webhook response: {0}")]
    ResponseParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl WebhookError {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a response parse error
    #[must_use]
    pub fn response_parse(msg: impl Into<String>) -> Self {
        Self::ResponseParse(msg.into())
    }

    /// Create a file access error
    #[must_use]
    pub fn file_access(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}
