//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Upstream completion (Anthropic Messages API, plus an offline mock)
//! - The HTTP surface (axum router, controllers, error mapping)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
