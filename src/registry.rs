//! Connection registry
//!
//! Tracks the WebSocket connection behind each issued request identifier so
//! that a later `POST /chat` can be correlated back to the originating tab.
//! The registry is injected into the handlers rather than living in a global,
//! which keeps it swappable in tests.

use std::collections::HashMap;
use std::sync::Mutex;

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::models::ServerMessage;

/// Sender half of a connected client's message channel.
///
/// The WebSocket task owns the receiving half and writes each message to the
/// socket as a JSON text frame. Anything holding a clone of this sender can
/// push to that client.
pub type ConnectionSender = mpsc::UnboundedSender<ServerMessage>;

/// In-memory map from request identifier to live connection.
///
/// An entry exists exactly while the underlying connection is open: it is
/// inserted when the client connects and removed when the socket task exits.
/// Nothing is persisted; a restart drops every issued identifier and clients
/// must reconnect for a fresh one.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    connections: Mutex<HashMap<String, ConnectionSender>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh request identifier for a new connection.
    pub fn new_request_id() -> String {
        Uuid::new_v4().simple().to_string()
    }

    /// Store the sender under `request_id`. A colliding identifier overwrites
    /// the previous entry.
    pub fn register(&self, request_id: String, sender: ConnectionSender) {
        let mut connections = self.connections.lock().unwrap();
        connections.insert(request_id, sender);
    }

    /// Current sender for `request_id`, if the connection is still open.
    pub fn lookup(&self, request_id: &str) -> Option<ConnectionSender> {
        let connections = self.connections.lock().unwrap();
        connections.get(request_id).cloned()
    }

    /// Drop the entry for `request_id`. No-op when absent.
    pub fn remove(&self, request_id: &str) {
        let mut connections = self.connections.lock().unwrap();
        connections.remove(request_id);
    }

    /// Best-effort push to the client behind `request_id`.
    ///
    /// Returns `true` if a registered sender accepted the message. A missing
    /// entry or a closed receiver (client disconnected after lookup) drops the
    /// message silently.
    pub fn push(&self, request_id: &str, message: ServerMessage) -> bool {
        match self.lookup(request_id) {
            Some(sender) => sender.send(message).is_ok(),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.connections.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel() -> (
        ConnectionSender,
        mpsc::UnboundedReceiver<ServerMessage>,
    ) {
        mpsc::unbounded_channel()
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = ConnectionRegistry::new();
        let (tx, mut rx) = channel();

        registry.register("abc123".to_string(), tx);

        let sender = registry.lookup("abc123").expect("sender should be registered");
        sender
            .send(ServerMessage::Response {
                message: "hi".to_string(),
            })
            .unwrap();
        assert_eq!(
            rx.try_recv().unwrap(),
            ServerMessage::Response {
                message: "hi".to_string()
            }
        );
    }

    #[test]
    fn test_lookup_unknown_is_none() {
        let registry = ConnectionRegistry::new();
        assert!(registry.lookup("missing").is_none());
    }

    #[test]
    fn test_remove_deletes_entry() {
        let registry = ConnectionRegistry::new();
        let (tx, _rx) = channel();

        registry.register("abc123".to_string(), tx);
        registry.remove("abc123");

        assert!(registry.lookup("abc123").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let registry = ConnectionRegistry::new();
        registry.remove("never-registered");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_overwrites_on_collision() {
        let registry = ConnectionRegistry::new();
        let (first_tx, mut first_rx) = channel();
        let (second_tx, mut second_rx) = channel();

        registry.register("abc123".to_string(), first_tx);
        registry.register("abc123".to_string(), second_tx);
        assert_eq!(registry.len(), 1);

        assert!(registry.push(
            "abc123",
            ServerMessage::Response {
                message: "hi".to_string()
            }
        ));
        assert!(first_rx.try_recv().is_err());
        assert!(second_rx.try_recv().is_ok());
    }

    #[test]
    fn test_push_to_unknown_id_is_dropped() {
        let registry = ConnectionRegistry::new();
        assert!(!registry.push(
            "missing",
            ServerMessage::Error {
                message: "dropped".to_string()
            }
        ));
    }

    #[test]
    fn test_push_to_closed_receiver_is_dropped() {
        let registry = ConnectionRegistry::new();
        let (tx, rx) = channel();
        registry.register("abc123".to_string(), tx);
        drop(rx);

        // Entry still present but the client side is gone
        assert!(!registry.push(
            "abc123",
            ServerMessage::Response {
                message: "hi".to_string()
            }
        ));
    }

    #[test]
    fn test_new_request_id_is_unique_and_nonempty() {
        let a = ConnectionRegistry::new_request_id();
        let b = ConnectionRegistry::new_request_id();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }
}
