// Handlers module

pub mod chat;
pub mod ws;

pub use chat::chat_handler;
pub use ws::client_connected;
