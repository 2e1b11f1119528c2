//! Shelfware Error Types
//!
//! Error handling for the Shelfware API client library.

use thiserror::Error;

/// Main error type for Shelfware client operations
#[derive(Debug, Error)]
pub enum ShelfwareError {
    /// Configuration errors (unreadable file, invalid JSON, missing fields)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Authentication failed (no token available, or the backend rejected it)
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Form input is malformed (e.g. hardware info is not valid JSON).
    /// Raised before any network activity.
    #[error("Invalid form data: {0}")]
    Form(String),

    /// HTTP request failed (transport error or non-2xx status)
    #[error("Request failed: {0}")]
    Request(String),

    /// Response body could not be decoded
    #[error("Response error: {0}")]
    Response(String),

    /// Request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),
}

impl From<reqwest::Error> for ShelfwareError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ShelfwareError::Timeout(err.to_string())
        } else if err.is_connect() {
            ShelfwareError::Request(format!("Connection failed: {}", err))
        } else if err.is_decode() {
            ShelfwareError::Response(format!("Failed to decode response: {}", err))
        } else {
            ShelfwareError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ShelfwareError {
    fn from(err: serde_json::Error) -> Self {
        ShelfwareError::Response(format!("JSON parsing error: {}", err))
    }
}

impl From<std::io::Error> for ShelfwareError {
    fn from(err: std::io::Error) -> Self {
        ShelfwareError::Config(format!("IO error: {}", err))
    }
}

/// Result type alias for Shelfware client operations
pub type Result<T> = std::result::Result<T, ShelfwareError>;
