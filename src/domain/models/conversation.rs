use std::fmt;

use serde_json::{json, Value};

/// Speaker of a conversation turn built locally (e.g. by the `ask` command).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A plain-text turn. Inbound client turns are never parsed into this type;
/// they are relayed as raw JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    role: Role,
    content: String,
}

impl ConversationTurn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Wire form understood by the Messages API.
    pub fn to_value(&self) -> Value {
        json!({"role": self.role.as_str(), "content": self.content})
    }
}

impl From<ConversationTurn> for Value {
    fn from(turn: ConversationTurn) -> Self {
        turn.to_value()
    }
}
