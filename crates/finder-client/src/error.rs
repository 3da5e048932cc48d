//! Client error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request timed out: {0}")]
    Timeout(reqwest::Error),

    #[error("find query failed: {message} (status {status})")]
    Server { status: u16, message: String },

    #[error("Invalid find response: {0}")]
    Decode(#[source] finder_core::Error),

    #[error("Lookup cancelled")]
    Cancelled,

    #[error("Lookup deadline exceeded")]
    DeadlineExceeded,

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl ClientError {
    /// True for errors caused by cancellation or an elapsed deadline/timeout
    pub fn is_cancellation(&self) -> bool {
        matches!(
            self,
            ClientError::Cancelled | ClientError::DeadlineExceeded | ClientError::Timeout(_)
        )
    }

    /// Classify a reqwest failure
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout(err)
        } else {
            ClientError::Transport(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
