//! HTTP routes for the chat relay
//!
//! This module defines all HTTP endpoints exposed by the service.

pub mod chat;
pub mod health;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{middleware::cors::cors_middleware, AppState};

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/chat", post(chat::relay_chat))
        .route("/health", get(health::health_check))
        // The CORS layer wraps routing so preflight never reaches a handler
        // and fallback responses carry the headers too.
        .layer(middleware::from_fn(cors_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
