//! Langflow API client
//!
//! Outbound side of the relay: a thin client for the hosted DataStax Langflow
//! run endpoint, behind the `FlowProvider` trait so the relay can be tested
//! against a double.

pub mod client;
pub mod error;
pub mod types;

use async_trait::async_trait;

pub use client::{LangflowClient, DEFAULT_RUN_URL};
pub use error::FlowError;
pub use types::{RunFlowRequest, RunFlowResponse};

/// Interface to the external chat-completion flow
#[async_trait]
pub trait FlowProvider: Send + Sync {
    /// Run the flow once with the given input and return the chat text.
    ///
    /// One submission is one call: no retry, no timeout beyond the transport
    /// default, and the call runs to completion even if the submitting client
    /// disconnects while it is in flight.
    async fn run_flow(&self, input_value: &str) -> Result<String, FlowError>;
}
