//! Error types for the Google Scholar scraper.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Missing fields and failed citation expansions are recovered where they occur
//! and never show up here.

use std::time::Duration;

/// Errors from the page fetcher (transport, timeout, HTTP status after retries).
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Rate limited by Google Scholar (429 response that survived the retry budget)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Timeout(_) | Self::Server { .. })
    }

    /// Get the retry-after duration if this is a rate limit error.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }
}

/// Errors from turning a response body into a document.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// Body was empty or whitespace only
    #[error("Empty document")]
    EmptyDocument,

    /// Body contained no markup at all
    #[error("Document is not HTML ({len} bytes without a single tag)")]
    NotMarkup {
        /// Body length in bytes
        len: usize,
    },
}

/// Errors reported by the top-level scraper entry points.
#[derive(thiserror::Error, Debug)]
pub enum ScholarError {
    /// Fetching the page failed
    #[error("Network error: {0}")]
    Client(#[from] ClientError),

    /// The page could not be parsed
    #[error("Parse error: {0}")]
    Extract(#[from] ExtractError),
}

impl ScholarError {
    /// Convert to a short message for terminal output.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(ClientError::Timeout(after)) => {
                format!("Google Scholar did not answer within {after:?}.")
            }
            Self::Client(e) => e.retry_after().map_or_else(
                || self.to_string(),
                |wait| format!("Rate limited by Google Scholar. Please wait {wait:?} before retrying."),
            ),
            Self::Extract(_) => self.to_string(),
        }
    }
}

/// Result type alias for fetcher operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for scraper entry points.
pub type ScholarResult<T> = Result<T, ScholarError>;
