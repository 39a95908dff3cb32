//! Common test utilities for the chat relay
//!
//! Shared fixtures: a config factory pointing at a stubbed gateway, an
//! in-process test server, a real-socket variant for connection-level
//! tests, and wiremock helpers for the gateway endpoints.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum_test::TestServer;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use chat_relay::{config::Config, routes, AppState};

/// Default test API key for the gateway
pub const TEST_API_KEY: &str = "test-gateway-api-key";
/// Model identifier used by test configs
pub const TEST_MODEL: &str = "google/gemini-3-flash-preview";
/// Short system-context text so upstream bodies stay readable in assertions
pub const TEST_CONTEXT: &str =
    "You are the assistant for an instrumented rail technology firm.";

/// Create a test config pointing at a stubbed gateway
pub fn test_config(gateway_url: &str) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        gateway_url: gateway_url.to_string(),
        gateway_api_key: Some(TEST_API_KEY.to_string()),
        model: TEST_MODEL.to_string(),
        system_context: TEST_CONTEXT.to_string(),
        upstream_timeout_seconds: 30,
    }
}

/// Build an in-process test server over the real router
pub fn relay_server(config: Config) -> TestServer {
    let state = Arc::new(AppState::new(config).expect("failed to build app state"));
    TestServer::new(routes::create_router(state)).expect("failed to start test server")
}

/// Serve the relay on a real socket for connection-level tests
/// (preflight over the wire, caller disconnect).
pub async fn spawn_relay(config: Config) -> SocketAddr {
    let state = Arc::new(AppState::new(config).expect("failed to build app state"));
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });

    addr
}

/// A three-turn conversation in chronological order
pub fn chat_body() -> serde_json::Value {
    json!({
        "messages": [
            { "role": "user", "content": "Hello" },
            { "role": "assistant", "content": "Hi! How can I help?" },
            { "role": "user", "content": "What does an instrumented wheelset measure?" }
        ]
    })
}

/// Mock AI gateway responses
pub mod gateway_mocks {
    use super::*;

    /// SSE stream body returned by the success mock, byte-for-byte
    pub const STREAM_BODY: &str = concat!(
        "data: {\"choices\":[{\"index\":0,\"delta\":{\"role\":\"assistant\"},\"finish_reason\":null}]}\n\n",
        "data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"Hello\"},\"finish_reason\":null}]}\n\n",
        "data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"!\"},\"finish_reason\":null}]}\n\n",
        "data: {\"choices\":[{\"index\":0,\"delta\":{},\"finish_reason\":\"stop\"}]}\n\n",
        "data: [DONE]\n\n",
    );

    /// Mock a successful streaming chat completion
    pub async fn mock_chat_stream(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(STREAM_BODY)
                    .insert_header("content-type", "text/event-stream")
                    .insert_header("cache-control", "no-cache"),
            )
            .mount(server)
            .await;
    }

    /// Mock a gateway error with the given status
    pub async fn mock_chat_error(server: &MockServer, status: u16) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": {
                    "message": "upstream rejected the request",
                    "type": "gateway_error"
                }
            })))
            .mount(server)
            .await;
    }
}
