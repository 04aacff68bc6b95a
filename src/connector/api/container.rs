use std::sync::Arc;

use anyhow::{bail, Result};
use tracing::debug;

use crate::application::{ChatClient, HealthUseCase, RelayChatUseCase};
use crate::connector::{AnthropicClient, MockChatClient};
use crate::domain::RelayConfig;

pub struct ContainerConfig {
    /// Upstream credential. Required unless `mock_upstream` is set.
    pub api_key: Option<String>,
    pub base_url: String,
    /// Answer from [`MockChatClient`] instead of calling the real API.
    pub mock_upstream: bool,
    pub relay: RelayConfig,
}

/// Process-wide wiring: the upstream client and the immutable relay settings.
///
/// Holds no mutable state, so one instance is shared across all requests.
pub struct Container {
    chat_client: Arc<dyn ChatClient>,
    relay_config: Arc<RelayConfig>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let chat_client: Arc<dyn ChatClient> = if config.mock_upstream {
            debug!("Using mock upstream chat client");
            Arc::new(MockChatClient::new())
        } else {
            let api_key = config
                .api_key
                .filter(|k| !k.trim().is_empty())
                .map(|k| k.trim().to_string());
            let Some(api_key) = api_key else {
                bail!("ANTHROPIC_API_KEY is not set; pass --api-key or use --mock-upstream");
            };
            debug!("Using Anthropic upstream at {}", config.base_url);
            Arc::new(AnthropicClient::new(api_key, config.base_url))
        };

        Ok(Self::with_chat_client(chat_client, config.relay))
    }

    /// Build a container around an existing client.
    pub fn with_chat_client(chat_client: Arc<dyn ChatClient>, relay: RelayConfig) -> Self {
        Self {
            chat_client,
            relay_config: Arc::new(relay),
        }
    }

    pub fn relay_chat_use_case(&self) -> RelayChatUseCase {
        RelayChatUseCase::new(self.chat_client.clone(), self.relay_config.clone())
    }

    pub fn health_use_case(&self) -> HealthUseCase {
        HealthUseCase::new(self.relay_config.clone())
    }

    pub fn relay_config(&self) -> &RelayConfig {
        &self.relay_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::DEFAULT_BASE_URL;

    fn config(api_key: Option<&str>, mock_upstream: bool) -> ContainerConfig {
        ContainerConfig {
            api_key: api_key.map(String::from),
            base_url: DEFAULT_BASE_URL.to_string(),
            mock_upstream,
            relay: RelayConfig::new(),
        }
    }

    #[test]
    fn missing_key_is_rejected() {
        assert!(Container::new(config(None, false)).is_err());
        assert!(Container::new(config(Some("   "), false)).is_err());
    }

    #[test]
    fn mock_upstream_needs_no_key() {
        assert!(Container::new(config(None, true)).is_ok());
    }

    #[test]
    fn key_builds_container() {
        let container = Container::new(config(Some("sk-ant-test"), false)).unwrap();
        assert_eq!(container.relay_config().max_tokens(), 1024);
    }
}
