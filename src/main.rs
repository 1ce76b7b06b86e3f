use std::sync::Arc;

use langflow_relay::config::ServerConfig;
use langflow_relay::langflow::LangflowClient;
use langflow_relay::registry::ConnectionRegistry;
use langflow_relay::relay::ChatRelay;
use langflow_relay::routes::configure_routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = ServerConfig::from_env();

    let provider = match LangflowClient::with_run_url(
        config.application_token.clone(),
        config.langflow_url.clone(),
    ) {
        Ok(client) => Arc::new(client),
        Err(err) => {
            log::error!("failed to set up Langflow client: {}", err);
            std::process::exit(1);
        }
    };

    let registry = Arc::new(ConnectionRegistry::new());
    let relay = Arc::new(ChatRelay::new(registry.clone(), provider));
    let routes = configure_routes(registry, relay);

    log::info!("Server running on port {}", config.port);
    warp::serve(routes).run(([0, 0, 0, 0], config.port)).await;
}
