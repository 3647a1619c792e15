use std::time::Duration;

use postman_core::error::ValidationError;

use crate::transport::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Identifier gate check failed; raised before any I/O.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Transport-level failure (no HTTP status), propagated unchanged.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Non-2xx response from the API.
    #[error("postman api error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        /// Server-supplied Retry-After, when the response carried one.
        retry_after: Option<Duration>,
    },

    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),

    #[error("failed to encode or decode JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// The polled task reported `status: failed`.
    #[error("{task} failed: {reason}")]
    TaskFailed { task: String, reason: String },

    /// The polling time budget ran out before a terminal status.
    #[error("{task} timed out after {elapsed_ms}ms (last status: {last_status})")]
    TaskTimeout {
        task: String,
        elapsed_ms: u64,
        last_status: String,
    },

    /// The polling attempt budget ran out before a terminal status.
    #[error("{task} exceeded maximum attempts ({attempts}) (last status: {last_status})")]
    AttemptsExhausted {
        task: String,
        attempts: u32,
        last_status: String,
    },
}

impl Error {
    /// HTTP status of the failed call, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether a status check should be retried: transport failures carry
    /// no status code and retry; 429 and 5xx retry; other 4xx do not.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Transport(_) => true,
            Error::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::Api { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}
