// Route definitions and handlers

use std::sync::Arc;

use warp::Filter;

use crate::handlers;
use crate::registry::ConnectionRegistry;
use crate::relay::ChatRelay;

pub fn configure_routes(
    registry: Arc<ConnectionRegistry>,
    relay: Arc<ChatRelay>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let with_registry = warp::any().map(move || registry.clone());
    let with_relay = warp::any().map(move || relay.clone());

    // GET /
    let root = warp::path::end().and(warp::get()).map(|| "Hello World");

    // GET /ws
    let ws = warp::path("ws")
        .and(warp::path::end())
        .and(warp::ws())
        .and(with_registry)
        .map(|upgrade: warp::ws::Ws, registry: Arc<ConnectionRegistry>| {
            upgrade.on_upgrade(move |socket| handlers::client_connected(socket, registry))
        });

    // POST /chat
    let chat = warp::path("chat")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_relay)
        .and_then(handlers::chat_handler);

    // The original fronted a browser SPA on another origin
    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST"])
        .allow_header("content-type");

    // Combine routes
    root.or(ws).or(chat).with(cors)
}
