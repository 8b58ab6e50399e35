//! Client configuration.

use std::time::Duration;

use crate::client::RemoteArithmetic;
use crate::error::ClientError;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the remote arithmetic adapter.
pub struct Config {
    /// Base URL of the calcpad server (e.g. `http://localhost:3001`).
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Config {
    /// Configuration for `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `CALCPAD_API_URL` is not set.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self::new(std::env::var("CALCPAD_API_URL")?))
    }

    /// Build a [`RemoteArithmetic`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the HTTP client cannot be created.
    pub fn build(self) -> Result<RemoteArithmetic, ClientError> {
        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        Ok(RemoteArithmetic::new(client, &self.base_url))
    }
}
