//! Process configuration, read from the environment at startup

use std::env;

use crate::langflow::DEFAULT_RUN_URL;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port (`PORT`)
    pub port: u16,
    /// Bearer credential for the flow API (`APPLICATION_TOKEN`).
    /// Not validated here: a missing token simply fails authentication on the
    /// first outbound call.
    pub application_token: String,
    /// Flow-run endpoint (`LANGFLOW_URL`), defaulting to the hosted flow
    pub langflow_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let application_token = env::var("APPLICATION_TOKEN").unwrap_or_default();

        let langflow_url =
            env::var("LANGFLOW_URL").unwrap_or_else(|_| DEFAULT_RUN_URL.to_string());

        Self {
            port,
            application_token,
            langflow_url,
        }
    }
}
