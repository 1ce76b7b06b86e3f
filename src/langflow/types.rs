//! Request and response wire types for the Langflow run endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::FlowError;

/// Body of a flow-run request
#[derive(Debug, Clone, Serialize)]
pub struct RunFlowRequest {
    pub input_value: String,
    pub output_type: String,
    pub input_type: String,
    pub tweaks: Value,
}

impl RunFlowRequest {
    /// Build a chat-mode request with the flow's fixed component tweaks
    pub fn chat(input_value: impl Into<String>) -> Self {
        Self {
            input_value: input_value.into(),
            output_type: "chat".to_string(),
            input_type: "chat".to_string(),
            tweaks: default_tweaks(),
        }
    }
}

/// Per-component overrides sent with every run. The flow expects the full set
/// of component ids even when nothing is overridden, so these are fixed empty
/// objects rather than per-request parameters.
pub fn default_tweaks() -> Value {
    serde_json::json!({
        "ParseData-bU2Lk": {},
        "SplitText-s45X9": {},
        "OpenAIModel-Bunci": {},
        "ChatOutput-8sI0F": {},
        "AstraDB-66x6b": {},
        "File-j3YRd": {},
        "ChatInput-iAwEu": {},
        "CombineText-1kBZ6": {},
        "TextInput-upHmt": {}
    })
}

// Response envelope: outputs[0].outputs[0].results.message.text

#[derive(Debug, Clone, Deserialize)]
pub struct RunFlowResponse {
    #[serde(default)]
    pub outputs: Vec<FlowOutput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlowOutput {
    #[serde(default)]
    pub outputs: Vec<ComponentOutput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComponentOutput {
    pub results: ComponentResults,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComponentResults {
    pub message: ResultMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultMessage {
    pub text: String,
}

impl RunFlowResponse {
    /// Extract the chat text from the nested envelope
    pub fn message_text(&self) -> Result<&str, FlowError> {
        self.outputs
            .first()
            .and_then(|flow| flow.outputs.first())
            .map(|component| component.results.message.text.as_str())
            .ok_or_else(|| {
                FlowError::MalformedResponse("response envelope has no outputs".to_string())
            })
    }
}
