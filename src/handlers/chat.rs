// POST /chat handler

use std::convert::Infallible;
use std::sync::Arc;

use warp::http::StatusCode;

use crate::models::{ChatAccepted, ChatRequest, ErrorResponse};
use crate::relay::{ChatRelay, RelayError};

/// Submit a chat message for relay.
///
/// Replies 200 `{"status":"Processing"}` once the flow has answered and the
/// result was pushed to the WebSocket, 400 when the request identifier has no
/// live connection, 500 when the flow call failed.
pub async fn chat_handler(
    request: ChatRequest,
    relay: Arc<ChatRelay>,
) -> Result<impl warp::Reply, Infallible> {
    log::info!("POST /chat for request {}", request.request_id);

    match relay.submit(&request.input_value, &request.request_id).await {
        Ok(()) => Ok(warp::reply::with_status(
            warp::reply::json(&ChatAccepted::processing()),
            StatusCode::OK,
        )),
        Err(err @ RelayError::ChannelNotFound) => {
            log::warn!("rejected chat for unknown request {}", request.request_id);
            Ok(warp::reply::with_status(
                warp::reply::json(&ErrorResponse {
                    error: err.to_string(),
                }),
                StatusCode::BAD_REQUEST,
            ))
        }
        Err(err) => {
            log::error!("flow call failed for request {}: {}", request.request_id, err);
            Ok(warp::reply::with_status(
                warp::reply::json(&ErrorResponse {
                    error: err.to_string(),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}
