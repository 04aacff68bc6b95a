use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, error, info};

use crate::application::ChatClient;
use crate::domain::{ChatReply, ChatRequest, DomainError, RelayConfig};

/// Validate a conversation, forward it upstream once, and hand back the reply.
pub struct RelayChatUseCase {
    chat_client: Arc<dyn ChatClient>,
    config: Arc<RelayConfig>,
}

impl RelayChatUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>, config: Arc<RelayConfig>) -> Self {
        Self {
            chat_client,
            config,
        }
    }

    /// Validate a raw JSON body and relay it.
    ///
    /// Invalid bodies fail with [`DomainError::InvalidInput`] before any
    /// upstream call is made.
    pub async fn execute_value(&self, body: Value) -> Result<ChatReply, DomainError> {
        let request = ChatRequest::from_value(body)?;
        self.execute(request).await
    }

    pub async fn execute(&self, request: ChatRequest) -> Result<ChatReply, DomainError> {
        debug!("Relaying conversation with {} turns", request.len());

        let completion = self.config.completion_for(request);
        let start_time = Instant::now();

        match self.chat_client.complete(&completion).await {
            Ok(text) => {
                info!(
                    "Upstream reply received in {:?} ({} chars)",
                    start_time.elapsed(),
                    text.len()
                );
                Ok(ChatReply::new(text))
            }
            Err(e) => {
                // Full detail stays server-side; callers only see the fallback.
                error!(
                    "Upstream completion failed after {:?}: {}",
                    start_time.elapsed(),
                    e
                );
                Err(e)
            }
        }
    }
}
