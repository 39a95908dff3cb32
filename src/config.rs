//! Configuration management for the chat relay
//!
//! Configuration is loaded from environment variables once at process start
//! and held read-only for the life of the process.

use anyhow::{Context, Result};
use std::env;

use crate::context::COMPANY_CONTEXT;

/// Environment variable holding the upstream gateway credential.
pub const GATEWAY_API_KEY_VAR: &str = "AI_GATEWAY_API_KEY";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// AI gateway base URL
    pub gateway_url: String,
    /// AI gateway API key. Absence is surfaced per-request, not at startup.
    pub gateway_api_key: Option<String>,
    /// Model identifier sent with every upstream request
    pub model: String,

    /// System-context text prepended to every conversation
    pub system_context: String,

    /// Total upstream request timeout (in seconds)
    pub upstream_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("RELAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("RELAY_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid RELAY_PORT")?,

            gateway_url: env::var("AI_GATEWAY_URL")
                .unwrap_or_else(|_| "https://ai.gateway.lovable.dev/v1".to_string()),
            gateway_api_key: env::var(GATEWAY_API_KEY_VAR).ok(),
            model: env::var("AI_GATEWAY_MODEL")
                .unwrap_or_else(|_| "google/gemini-3-flash-preview".to_string()),

            system_context: env::var("RELAY_SYSTEM_CONTEXT")
                .unwrap_or_else(|_| COMPANY_CONTEXT.to_string()),

            upstream_timeout_seconds: env::var("UPSTREAM_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .context("Invalid UPSTREAM_TIMEOUT_SECONDS")?,
        })
    }
}
