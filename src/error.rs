//! Error types for wiki-reflect
//!
//! This module provides the error handling for the library:
//! - [`Error::Fetch`] wraps every network, status and parse failure ([`FetchError`])
//! - [`Error::NotFound`] reports a title that resolved but has no page behind it
//! - Machine-readable error codes for structured logging

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for wiki-reflect operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wiki-reflect
///
/// Both fetch failures and not-found failures are terminal for the operation that
/// raised them. Nothing in the library retries.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "wiki.user_agent")
        key: Option<String>,
    },

    /// Network, HTTP status or response parsing failure
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// No random title could be obtained; nothing was fetched
    #[error("could not resolve a random title: {0}")]
    TitleResolution(#[source] FetchError),

    /// The title was resolved but the page does not exist
    #[error("article '{title}' not found")]
    NotFound {
        /// The title that was looked up
        title: String,
    },

    /// The operation was cancelled before it completed
    #[error("operation cancelled")]
    Cancelled,

    /// A background fetch task ended abnormally (it panicked)
    #[error("fetch task failed: {0}")]
    Task(String),

    /// I/O error (reading config files, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures talking to the MediaWiki API
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body read failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("HTTP {status} from {url}")]
    Status {
        /// The HTTP status code
        status: u16,
        /// The requested URL
        url: String,
    },

    /// The body was not valid JSON for the expected shape
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API returned an `error` object instead of a result
    #[error("API error {code}: {info}")]
    Api {
        /// MediaWiki error code (e.g., "badvalue")
        code: String,
        /// MediaWiki error description
        info: String,
    },

    /// The body parsed but lacked a required field
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The random list returned a title that was empty
    #[error("empty title in random article response")]
    EmptyTitle,
}

impl Error {
    /// Create a configuration error for the given key
    pub fn config(message: impl Into<String>, key: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }

    /// Get the machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Config { .. } => "config_error",
            Error::Fetch(e) | Error::TitleResolution(e) => e.error_code(),
            Error::NotFound { .. } => "not_found",
            Error::Cancelled => "cancelled",
            Error::Task(_) => "task_failed",
            Error::Io(_) => "io_error",
        }
    }

    /// Whether this is a fetch failure (as opposed to a missing page)
    ///
    /// Failing to resolve a random title counts as a fetch failure.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Error::Fetch(_) | Error::TitleResolution(_))
    }
}

impl FetchError {
    /// Get the machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Network(e) if e.is_timeout() => "timeout",
            FetchError::Network(e) if e.is_connect() => "connection_failed",
            FetchError::Network(_) => "network_error",
            FetchError::Status { .. } => "http_status",
            FetchError::Decode(_) => "decode_error",
            FetchError::Api { .. } => "api_error",
            FetchError::Malformed(_) => "malformed_response",
            FetchError::EmptyTitle => "empty_title",
        }
    }
}

/// Machine-readable failure report
///
/// Written by the console front-end in JSON mode.
///
/// # Example JSON
///
/// ```json
/// {
///   "error": {
///     "code": "not_found",
///     "message": "article 'Atlantis' not found",
///     "title": "Atlantis"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// The error details
    pub error: ErrorDetail,
}

/// Detailed error information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (see [`Error::error_code`])
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Article title the failure relates to, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl From<&Error> for ErrorReport {
    fn from(error: &Error) -> Self {
        let title = match error {
            Error::NotFound { title } => Some(title.clone()),
            _ => None,
        };
        Self {
            error: ErrorDetail {
                code: error.error_code().to_string(),
                message: error.to_string(),
                title,
            },
        }
    }
}
