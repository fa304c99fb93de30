//! LibreNMS client errors

use thiserror::Error;

/// Errors that can occur when interacting with the LibreNMS API
#[derive(Debug, Error)]
pub enum LibreNmsError {
    /// HTTP transport error (DNS, connection refused, transport timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body is not valid JSON, or a field has an unexpected shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The expected envelope field is absent from the decoded response
    #[error("Response from {path} has no `{field}` field")]
    MissingField {
        /// Request path relative to the API base URL
        path: String,
        /// Envelope field that was expected
        field: &'static str,
    },

    /// A single-record endpoint returned an empty array
    #[error("Empty result: {0}")]
    EmptyResult(String),

    /// Invalid request or client configuration (e.g., token is not a valid header value)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
