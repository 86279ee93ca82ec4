//! Error types and Result alias for the daily case client
//!
//! `Transport`, `InvalidData` and `MalformedResponse` are all
//! transport-class failures for the spin cycle: the attempt aborts back to
//! idle without touching the wallet, and the user may retry immediately.
//! `LockedOut` carries the server's pre-formatted countdown and is never
//! retried automatically.

use thiserror::Error;

/// Main error type for the daily case client
#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Daily limit reached, next spin in {time_left}")]
    LockedOut { time_left: String },

    #[error("Malformed grant response: {0}")]
    MalformedResponse(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Database error: {0}")]
    Storage(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidData(err.to_string())
    }
}
