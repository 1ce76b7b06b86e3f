use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use warp::Filter;

use langflow_relay::langflow::{FlowError, FlowProvider};
use langflow_relay::registry::ConnectionRegistry;
use langflow_relay::relay::ChatRelay;
use langflow_relay::routes::configure_routes;

/// Flow double with a canned outcome and a call counter
pub struct ScriptedFlow {
    calls: AtomicUsize,
    outcome: Result<String, String>,
}

impl ScriptedFlow {
    /// Always answer with `text`
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcome: Ok(text.to_string()),
        })
    }

    /// Always fail with a network-level error carrying `message`
    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcome: Err(message.to_string()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FlowProvider for ScriptedFlow {
    async fn run_flow(&self, _input_value: &str) -> Result<String, FlowError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(FlowError::Network(message.clone())),
        }
    }
}

/// Wire up the full route stack around a scripted flow
pub fn build_app(
    provider: Arc<ScriptedFlow>,
) -> (
    Arc<ConnectionRegistry>,
    impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone,
) {
    let registry = Arc::new(ConnectionRegistry::new());
    let relay = Arc::new(ChatRelay::new(registry.clone(), provider));
    let routes = configure_routes(registry.clone(), relay);
    (registry, routes)
}

/// Parse a text frame into JSON
pub fn frame_json(message: &warp::ws::Message) -> serde_json::Value {
    let text = message.to_str().expect("expected a text frame");
    serde_json::from_str(text).expect("expected valid JSON")
}
