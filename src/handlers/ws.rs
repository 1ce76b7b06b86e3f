// GET /ws connection handler

use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use warp::ws::{Message, WebSocket};

use crate::models::ServerMessage;
use crate::registry::ConnectionRegistry;

/// Drive one client connection for its whole lifetime.
///
/// Assigns a request identifier, registers the connection, greets the client
/// with `{"type":"requestId",...}`, then forwards queued server messages to
/// the socket until either side goes away. The registry entry lives exactly
/// as long as this task.
pub async fn client_connected(socket: WebSocket, registry: Arc<ConnectionRegistry>) {
    let request_id = ConnectionRegistry::new_request_id();
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    registry.register(request_id.clone(), tx.clone());
    log::info!(
        "client connected, assigned request {} ({} active)",
        request_id,
        registry.len()
    );

    // Queued like any other push so it takes the same serialization path
    let _ = tx.send(ServerMessage::RequestId {
        request_id: request_id.clone(),
    });

    let (mut ws_tx, mut ws_rx) = socket.split();

    loop {
        tokio::select! {
            queued = rx.recv() => {
                let message = match queued {
                    Some(message) => message,
                    None => break,
                };
                let json = match serde_json::to_string(&message) {
                    Ok(json) => json,
                    Err(err) => {
                        log::error!("failed to serialize push for {}: {}", request_id, err);
                        continue;
                    }
                };
                if ws_tx.send(Message::text(json)).await.is_err() {
                    break;
                }
            }
            incoming = ws_rx.next() => {
                match incoming {
                    // Clients do not speak on this socket; drain and ignore
                    Some(Ok(frame)) if !frame.is_close() => {}
                    _ => break,
                }
            }
        }
    }

    registry.remove(&request_id);
    log::info!(
        "client disconnected, request {} dropped ({} active)",
        request_id,
        registry.len()
    );
}
