//! Chat relay endpoint
//!
//! Accepts a conversation history, prepends the fixed system context, and
//! relays the gateway's event stream back to the caller as it arrives.

use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, StatusCode},
    response::Response,
};
use futures::TryStreamExt;
use tracing::{info, warn};

use crate::{
    context::{with_system_context, ChatRequest},
    error::AppError,
    AppState,
};

/// Handle chat relay requests
///
/// The body must be JSON with a `messages` sequence. Validation failures
/// return 400 before any upstream call. On success the upstream byte
/// stream is forwarded chunk by chunk, never accumulated; if it errors
/// mid-flight the response stream simply ends.
pub async fn relay_chat(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, AppError> {
    let request: ChatRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::MalformedRequest(e.to_string()))?;

    info!(messages = request.messages.len(), "Processing chat request");

    let composed = with_system_context(&state.config.system_context, &request.messages);
    let stream = state.gateway.chat_stream(&composed).await?;

    // A mid-stream failure ends the body without a synthetic error frame;
    // callers treat an unexpectedly short stream as a failure.
    let relayed = stream.inspect_err(|error| warn!(%error, "Upstream stream ended with error"));

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/event-stream")
        .header(header::CACHE_CONTROL, "no-cache")
        .header("X-Accel-Buffering", "no")
        .body(Body::from_stream(relayed))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build response: {}", e)))?;

    Ok(response)
}
