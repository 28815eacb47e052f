//! Error types for the hdfslib library.

use thiserror::Error;

/// Main error type for hdfslib operations.
#[derive(Error, Debug)]
pub enum HdfsError {
    /// Transport failed before any response was received.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The gateway answered with a non-success HTTP status.
    ///
    /// `body` carries the raw response body so callers can inspect the
    /// error envelope the gateway returned alongside the status.
    #[error("remote error: HTTP {status}: {message}")]
    Remote {
        status: u16,
        message: String,
        body: String,
    },

    /// Response body present but not decodable into the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The in-flight request was aborted by the caller.
    #[error("operation cancelled")]
    Cancelled,

    /// The base service URL could not be used.
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for HdfsError {
    fn from(err: reqwest::Error) -> Self {
        HdfsError::Transport(Box::new(err))
    }
}

/// Result type alias for hdfslib operations.
pub type Result<T> = std::result::Result<T, HdfsError>;

/// Failure notification delivered to a registered error callback.
///
/// Exactly one event is emitted per failed invocation: either the response
/// the gateway produced or the transport exception, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorEvent {
    /// The gateway completed the exchange with a non-success status.
    Response { status: u16, body: String },
    /// The transport failed before a response was available.
    Exception(String),
}

/// Type alias for the error notification callback.
///
/// The callback is invoked once per failed request, before the call itself
/// returns its error. It must not block.
pub type ErrorCallback = Box<dyn Fn(&ErrorEvent) + Send + Sync>;
