use std::sync::Arc;

use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use super::container::Container;
use super::controller::{chat, health};
use super::cors::cors_layer;

pub const CHAT_PATH: &str = "/api/chat";
pub const HEALTH_PATH: &str = "/api/health";

/// Build the HTTP surface: the chat relay and the health check.
pub fn build_router(container: Arc<Container>, cors_origins: &[String]) -> axum::Router {
    axum::Router::new()
        .route(CHAT_PATH, post(chat))
        .route(HEALTH_PATH, get(health))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(container)
}
