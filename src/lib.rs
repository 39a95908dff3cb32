//! chat-relay - streaming chat relay for the site assistant
//!
//! Accepts a conversation history over HTTP, prepends the fixed company
//! context, forwards the request to the hosted AI gateway, and streams the
//! response back to the caller byte-for-byte as it arrives.

pub mod config;
pub mod context;
pub mod error;
pub mod gateway;
pub mod middleware;
pub mod routes;

use std::time::{Duration, Instant};

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{AppError, AppResult};
pub use crate::gateway::GatewayClient;

/// Application state shared across all request handlers
///
/// Read-only after initialization; request handling writes no global state.
pub struct AppState {
    pub config: Config,
    pub gateway: GatewayClient,
    pub start_time: Instant,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // One pooled HTTP client; its timeout bounds worst-case resource
        // hold per upstream request, streaming included.
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_seconds))
            .build()?;

        let gateway = GatewayClient::new(http_client, &config);

        Ok(Self {
            config,
            gateway,
            start_time: Instant::now(),
        })
    }
}
