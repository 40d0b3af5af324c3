//! Error types for the Matchbook client.

use thiserror::Error;

/// Result type for Matchbook client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Matchbook client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration error (missing base URL, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failure (connection refused, DNS, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response from the backend. `message` carries the
    /// backend-supplied `detail` text when present, the raw body otherwise.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}
