//! Client-facing error type

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure before a response was received
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx backend response, body passed through unchanged
    #[error("Backend returned {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Backend response body did not match the expected shape
    #[error("Failed to decode backend response: {reason}")]
    Decode { reason: String },

    /// Local precondition failed before any network call was attempted
    #[error(transparent)]
    Precondition(#[from] unihelp_core::UnihelpError),
}

pub type Result<T> = std::result::Result<T, ClientError>;
