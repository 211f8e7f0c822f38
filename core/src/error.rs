//! Error types for the placeholder feed client.
//!
//! # Design
//! Transport failures and unreadable bodies are the two outcomes a caller
//! must always handle. Non-2xx responses get their own variant carrying the
//! raw status and body so a 404 page is not reported as a JSON syntax error.
//! Every payload is an owned `String`, which keeps the error `Clone` and lets
//! the same failure travel through a callback, a `Deferred`, or `?`.

use thiserror::Error;

/// Errors returned by `FetchClient` and its completion adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request could not be built, usually because the base URL does not
    /// form a valid URL. Nothing was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The connection could not be made or broke mid-response (DNS, TCP, TLS).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not UTF-8, not JSON, or lacked a required field.
    #[error("parse failed: {0}")]
    Parse(String),

    /// The background task driving a deferred fetch panicked or was aborted.
    #[error("fetch task did not complete: {0}")]
    TaskFailed(String),
}

impl FetchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, FetchError::Parse(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            FetchError::InvalidRequest(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

impl From<tokio::task::JoinError> for FetchError {
    fn from(err: tokio::task::JoinError) -> Self {
        FetchError::TaskFailed(err.to_string())
    }
}
