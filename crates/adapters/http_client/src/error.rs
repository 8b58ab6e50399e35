//! Client-specific error type wrapping reqwest errors.

use calcpad_domain::error::{CalcError, RemoteError};

/// Errors originating from the HTTP client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

impl From<ClientError> for CalcError {
    fn from(err: ClientError) -> Self {
        Self::Remote(RemoteError::new(err.to_string()))
    }
}
