//! Chat relay
//!
//! Correlates a chat submission with the WebSocket that announced its request
//! identifier, runs the flow once, and pushes the outcome back over that
//! socket. The synchronous return value only acknowledges or rejects the
//! submission; the chat content itself travels over the channel.

use std::sync::Arc;

use thiserror::Error;

use crate::langflow::{FlowError, FlowProvider};
use crate::models::ServerMessage;
use crate::registry::ConnectionRegistry;

#[derive(Debug, Error)]
pub enum RelayError {
    /// Submission referenced an identifier with no live connection
    #[error("WebSocket connection not found")]
    ChannelNotFound,

    /// The flow call failed; the same text was pushed to the channel if it
    /// was still open
    #[error(transparent)]
    Dependency(#[from] FlowError),
}

pub struct ChatRelay {
    registry: Arc<ConnectionRegistry>,
    provider: Arc<dyn FlowProvider>,
}

impl ChatRelay {
    pub fn new(registry: Arc<ConnectionRegistry>, provider: Arc<dyn FlowProvider>) -> Self {
        Self { registry, provider }
    }

    /// Handle one chat submission.
    ///
    /// Rejects synchronously when `request_id` has no registered connection;
    /// the provider is never invoked in that case. Otherwise runs the flow
    /// once and pushes exactly one `response` or `error` message. The push is
    /// best-effort: if the client disconnected while the flow call was in
    /// flight, the message is dropped silently.
    pub async fn submit(&self, input_value: &str, request_id: &str) -> Result<(), RelayError> {
        if self.registry.lookup(request_id).is_none() {
            return Err(RelayError::ChannelNotFound);
        }

        match self.provider.run_flow(input_value).await {
            Ok(message) => {
                if !self
                    .registry
                    .push(request_id, ServerMessage::Response { message })
                {
                    log::warn!("client {} disconnected before response push", request_id);
                }
                Ok(())
            }
            Err(err) => {
                self.registry.push(
                    request_id,
                    ServerMessage::Error {
                        message: err.to_string(),
                    },
                );
                Err(RelayError::Dependency(err))
            }
        }
    }
}
