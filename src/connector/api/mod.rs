pub mod container;
pub mod controller;
pub mod cors;
pub mod dto;
pub mod error;
pub mod router;
pub mod server;

pub use container::{Container, ContainerConfig};
pub use dto::{ChatSuccessBody, ErrorBody, HealthBody};
pub use error::ApiError;
pub use router::{build_router, CHAT_PATH, HEALTH_PATH};
pub use server::{serve, ServerOptions};
