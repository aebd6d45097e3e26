//! Error types for UniHelp

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnihelpError {
    // Lifecycle precondition errors, rejected before any network call
    #[error("Completion report must not be empty")]
    EmptyCompletionReport,

    #[error("Rating {rate} is out of range (expected 0..=5)")]
    RatingOutOfRange { rate: i64 },

    #[error("Request {id} does not allow group funding")]
    GroupFundingNotAllowed { id: u64 },

    #[error("Action {action} is not allowed for request {id} in its current state")]
    ActionNotAllowed { id: u64, action: &'static str },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },
}

pub type Result<T> = std::result::Result<T, UnihelpError>;
