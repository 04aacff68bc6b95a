use async_trait::async_trait;

use crate::domain::{CompletionRequest, DomainError};

/// An interface for sending a conversation to an LLM and receiving the reply text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. [`crate::application::RelayChatUseCase`] only sees this trait, so
/// tests can swap in a fake without touching the network.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Issue exactly one completion call and return the first text segment
    /// of the reply.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError>;
}
