//! HTTP client for the hosted Langflow run endpoint

use async_trait::async_trait;
use reqwest::Client;

use super::error::FlowError;
use super::types::{RunFlowRequest, RunFlowResponse};
use super::FlowProvider;

/// Hosted flow-run endpoint on DataStax Astra (non-streaming)
pub const DEFAULT_RUN_URL: &str = "https://api.langflow.astra.datastax.com/lf/882442eb-1aec-4e92-9580-e016227c9bfb/api/v1/run/0a074bab-145a-43e4-8063-80830b70ed41?stream=false";

/// Client for running the chat flow against the Langflow API
pub struct LangflowClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Bearer credential for the Authorization header
    application_token: String,
    /// Flow-run endpoint URL
    run_url: String,
}

impl LangflowClient {
    /// Create a client against the default hosted endpoint.
    ///
    /// The token is not validated here; an empty or wrong token surfaces as an
    /// authentication failure from the flow API on the first call.
    pub fn new(application_token: String) -> Result<Self, FlowError> {
        Self::with_run_url(application_token, DEFAULT_RUN_URL.to_string())
    }

    /// Create a client against a specific run URL (used for local stand-ins)
    pub fn with_run_url(application_token: String, run_url: String) -> Result<Self, FlowError> {
        let http_client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .map_err(|e| FlowError::Network(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            application_token,
            run_url,
        })
    }
}

#[async_trait]
impl FlowProvider for LangflowClient {
    async fn run_flow(&self, input_value: &str) -> Result<String, FlowError> {
        let request = RunFlowRequest::chat(input_value);

        let response = self
            .http_client
            .post(&self.run_url)
            .header(
                "Authorization",
                format!("Bearer {}", self.application_token),
            )
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(FlowError::Api {
                status: status.as_u16(),
                body,
            });
        }

        // Decode by hand so a bad envelope maps to MalformedResponse, not a
        // transport error
        let body = response.text().await?;
        let envelope: RunFlowResponse = serde_json::from_str(&body)?;
        Ok(envelope.message_text()?.to_string())
    }
}
