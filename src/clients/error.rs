//! Error types for the order API clients.

use thiserror::Error;

/// Errors that can occur while fetching orders from the API.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The configured base URL cannot be used to build endpoint URLs.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("Unexpected status {status}: {reason}")]
    Status { status: u16, reason: String },

    /// The response body is not the JSON shape we expect.
    #[error("Could not decode response: {0}")]
    Decode(String),
}
