// Wire-level data structures (HTTP bodies, WebSocket messages)

use serde::{Deserialize, Serialize};

// Chat submission body for POST /chat
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub input_value: String,
    #[serde(rename = "requestId")]
    pub request_id: String,
}

// Acknowledgment returned to the HTTP caller on an accepted submission.
// The actual chat content arrives later over the WebSocket, not here.
#[derive(Debug, Clone, Serialize)]
pub struct ChatAccepted {
    pub status: &'static str,
}

impl ChatAccepted {
    pub fn processing() -> Self {
        Self {
            status: "Processing",
        }
    }
}

// Error body for rejected or failed submissions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Messages the server pushes to a client over its WebSocket
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    RequestId {
        #[serde(rename = "requestId")]
        request_id: String,
    },
    Response {
        message: String,
    },
    Error {
        message: String,
    },
}
