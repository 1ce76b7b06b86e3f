// HTTP/WebSocket server modules
pub mod config;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod routes;

// Chat relay core
pub mod relay;

// Langflow API client
pub mod langflow;
