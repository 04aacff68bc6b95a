use std::path::Path;

use super::{ChatRequest, CompletionRequest, DEFAULT_SYSTEM_PROMPT};
use crate::domain::DomainError;

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_SERVICE_NAME: &str = "Royal Medical Spa Chatbot";

/// Immutable per-process relay settings.
///
/// Built once at startup and shared read-only by every request; nothing in
/// a request can alter it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    system_prompt: String,
    model: String,
    max_tokens: u32,
    service_name: String,
}

impl RelayConfig {
    pub fn new() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Replace the system prompt with the contents of `path`.
    ///
    /// Surrounding whitespace is trimmed; a file with no remaining text is
    /// rejected.
    pub fn with_system_prompt_file(self, path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::config(format!(
                "system prompt file {} is empty",
                path.display()
            )));
        }
        Ok(self.with_system_prompt(trimmed))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Upstream rejects a zero output budget, so it is refused here.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Result<Self, DomainError> {
        if max_tokens == 0 {
            return Err(DomainError::config("max_tokens must be at least 1"));
        }
        self.max_tokens = max_tokens;
        Ok(self)
    }

    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Attach the fixed parameters to a caller's conversation.
    pub fn completion_for(&self, request: ChatRequest) -> CompletionRequest {
        CompletionRequest::new(
            &self.model,
            self.max_tokens,
            &self.system_prompt,
            request.into_messages(),
        )
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConversationTurn;
    use std::io::Write;

    #[test]
    fn defaults_carry_spa_prompt() {
        let config = RelayConfig::new();
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.max_tokens(), 1024);
        assert!(config.system_prompt().starts_with("You are a helpful AI assistant"));
    }

    #[test]
    fn completion_keeps_turn_order() {
        let config = RelayConfig::new().with_system_prompt("Be brief.");
        let request = ChatRequest::from_turns([
            ConversationTurn::user("a"),
            ConversationTurn::assistant("b"),
            ConversationTurn::user("c"),
        ]);
        let completion = config.completion_for(request.clone());
        assert_eq!(completion.system(), "Be brief.");
        assert_eq!(completion.messages(), request.messages());
        assert_eq!(completion.last_user_content(), Some("c"));
    }

    #[test]
    fn zero_max_tokens_is_rejected() {
        let err = RelayConfig::new().with_max_tokens(0).unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
        assert_eq!(RelayConfig::new().with_max_tokens(256).unwrap().max_tokens(), 256);
    }

    #[test]
    fn prompt_file_overrides_default() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "\n  You answer questions about a bakery.  \n").unwrap();
        let config = RelayConfig::new()
            .with_system_prompt_file(file.path())
            .expect("load prompt");
        assert_eq!(config.system_prompt(), "You answer questions about a bakery.");
    }

    #[test]
    fn blank_prompt_file_is_rejected() {
        let file = tempfile::NamedTempFile::new().expect("tempfile");
        let err = RelayConfig::new()
            .with_system_prompt_file(file.path())
            .unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }

    #[test]
    fn missing_prompt_file_is_io_error() {
        let err = RelayConfig::new()
            .with_system_prompt_file("/nonexistent/prompt.txt")
            .unwrap_err();
        assert!(matches!(err, DomainError::IoError(_)));
    }
}
