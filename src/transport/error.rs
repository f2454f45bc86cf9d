use thiserror::Error;

/// Errors surfaced by a [`Transport`](super::Transport).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be built or sent (DNS, connect, timeout, redirect loop).
    #[error("request to '{url}' failed: {message}")]
    Request {
        /// Requested URL.
        url: String,
        /// Error message.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("request to '{url}' returned HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The response body could not be read as text.
    #[error("failed to read body from '{url}': {message}")]
    Body {
        /// Requested URL.
        url: String,
        /// Error message.
        message: String,
    },

    /// The HTTP client itself could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl TransportError {
    /// Returns the URL the failed request targeted, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            TransportError::Request { url, .. }
            | TransportError::Status { url, .. }
            | TransportError::Body { url, .. } => Some(url),
            TransportError::Client(_) => None,
        }
    }
}

/// Convenience result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
