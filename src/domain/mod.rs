//! # Domain Layer
//!
//! Conversation models, relay configuration, and the error taxonomy.
//! This layer is independent of the HTTP framework and the upstream vendor.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
