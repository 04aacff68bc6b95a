use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::application::ChatClient;
use crate::domain::{CompletionRequest, DomainError};

const GREETING: &str = "Hello! How can I help you today?";

#[derive(Debug, Clone)]
enum MockBehavior {
    Echo,
    Reply(String),
    Fail(u16),
}

/// Offline [`ChatClient`] used by `--mock-upstream` and by tests.
///
/// Every call is counted. Requests are only retained when the client is
/// built with [`MockChatClient::recording`], so a long-running mock server
/// holds no per-request state.
pub struct MockChatClient {
    behavior: MockBehavior,
    call_count: AtomicUsize,
    recorded: Option<Mutex<Vec<CompletionRequest>>>,
}

impl MockChatClient {
    /// Replies by echoing the latest user turn.
    pub fn new() -> Self {
        Self::with_behavior(MockBehavior::Echo)
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Reply(reply.into()))
    }

    /// Every call fails as if upstream returned `status`.
    pub fn failing(status: u16) -> Self {
        Self::with_behavior(MockBehavior::Fail(status))
    }

    /// Keep a copy of every request for later inspection via [`Self::calls`].
    pub fn recording(mut self) -> Self {
        self.recorded = Some(Mutex::new(Vec::new()));
        self
    }

    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: AtomicUsize::new(0),
            recorded: None,
        }
    }

    /// Recorded requests; always empty unless built with [`Self::recording`].
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.recorded
            .as_ref()
            .map(|calls| calls.lock().unwrap_or_else(PoisonError::into_inner).clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Some(calls) = &self.recorded {
            calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(request.clone());
        }

        match &self.behavior {
            MockBehavior::Echo => Ok(request
                .last_user_content()
                .map(|c| format!("You said: {c}"))
                .unwrap_or_else(|| GREETING.to_string())),
            MockBehavior::Reply(text) => Ok(text.clone()),
            MockBehavior::Fail(status) => Err(DomainError::upstream(
                *status,
                r#"{"type":"error","error":{"type":"api_error","message":"mock failure"}}"#,
            )),
        }
    }
}
