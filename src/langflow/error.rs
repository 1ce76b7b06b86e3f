//! Error types for the Langflow client

use thiserror::Error;

/// Errors that can occur when running a flow against the hosted API
#[derive(Debug, Error)]
pub enum FlowError {
    /// Transport-level failure (DNS, TLS, timeout, connection reset).
    /// Displays as the bare message so it relays to the client verbatim.
    #[error("{0}")]
    Network(String),

    /// The flow API answered with a non-success status
    #[error("flow API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// The response envelope did not have the expected shape
    #[error("malformed flow response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for FlowError {
    fn from(err: reqwest::Error) -> Self {
        FlowError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FlowError {
    fn from(err: serde_json::Error) -> Self {
        FlowError::MalformedResponse(err.to_string())
    }
}
