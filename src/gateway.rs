//! AI gateway client
//!
//! Forwards composed conversations to the hosted completion API and hands
//! back the raw response stream. Exactly one upstream call is attempted per
//! inbound request; retry policy is the caller's concern.

use bytes::Bytes;
use futures::Stream;
use serde::Serialize;
use std::pin::Pin;
use tracing::{debug, error};

use crate::{
    config::{Config, GATEWAY_API_KEY_VAR},
    context::ChatMessage,
    error::{AppError, AppResult},
};

/// Stream type for streaming responses from the gateway
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send>>;

/// Upstream request body
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

/// AI gateway client
pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl GatewayClient {
    /// Create a new gateway client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.gateway_url.clone(),
            api_key: config.gateway_api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Forward a composed conversation with a streaming response.
    ///
    /// On success the response body stream is returned unconsumed; the
    /// relay reads it chunk by chunk. On a non-success status the body is
    /// read to completion for diagnostics and the status is classified
    /// into a caller-facing error.
    pub async fn chat_stream(&self, messages: &[ChatMessage]) -> AppResult<ByteStream> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AppError::MissingCredential(GATEWAY_API_KEY_VAR))?;

        let url = format!("{}/chat/completions", self.base_url);
        let body = CompletionRequest {
            model: &self.model,
            messages,
            stream: true,
        };

        debug!(url = %url, model = %self.model, "Forwarding chat request to AI gateway");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!(status = %status, body = %text, "AI gateway returned an error");
            return Err(AppError::from_upstream_status(status));
        }

        Ok(Box::pin(response.bytes_stream()))
    }
}
