use serde_json::Value;

/// Everything the upstream needs for one completion: model parameters, the
/// system instruction, and the caller's turns exactly as received.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<Value>,
}

impl CompletionRequest {
    pub fn new(
        model: impl Into<String>,
        max_tokens: u32,
        system: impl Into<String>,
        messages: Vec<Value>,
    ) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            system: system.into(),
            messages,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn messages(&self) -> &[Value] {
        &self.messages
    }

    /// Text of the most recent user turn, if any.
    ///
    /// Handles both plain string content and the content-block form, where
    /// the first `text` block is used.
    pub fn last_user_content(&self) -> Option<&str> {
        let turn = self
            .messages
            .iter()
            .rev()
            .find(|t| t.get("role").and_then(Value::as_str) == Some("user"))?;

        match turn.get("content")? {
            Value::String(text) => Some(text.as_str()),
            Value::Array(blocks) => blocks
                .iter()
                .find_map(|b| b.get("text").and_then(Value::as_str)),
            _ => None,
        }
    }
}
