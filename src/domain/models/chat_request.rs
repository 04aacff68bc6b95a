use serde_json::Value;

use super::ConversationTurn;
use crate::domain::DomainError;

/// An inbound conversation.
///
/// Only the container shape is checked; each element is kept exactly as the
/// caller sent it and relayed unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    messages: Vec<Value>,
}

impl ChatRequest {
    pub fn new(messages: Vec<Value>) -> Self {
        Self { messages }
    }

    pub fn from_turns(turns: impl IntoIterator<Item = ConversationTurn>) -> Self {
        Self::new(turns.into_iter().map(Value::from).collect())
    }

    /// Validate a raw request body.
    ///
    /// `messages` must be present and be a JSON array. Its elements are not
    /// inspected, and an empty array is accepted; the upstream decides what
    /// to do with either.
    pub fn from_value(body: Value) -> Result<Self, DomainError> {
        let Value::Object(mut fields) = body else {
            return Err(DomainError::invalid_input("request body must be an object"));
        };
        match fields.remove("messages") {
            Some(Value::Array(messages)) => Ok(Self { messages }),
            _ => Err(DomainError::invalid_input("`messages` must be an array")),
        }
    }

    pub fn messages(&self) -> &[Value] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_messages(self) -> Vec<Value> {
        self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_ordered_turns() {
        let body = json!({
            "messages": [
                {"role": "user", "content": "Do you offer Botox?"},
                {"role": "assistant", "content": "Yes."},
                {"role": "user", "content": "How much?"}
            ]
        });
        let request = ChatRequest::from_value(body).unwrap();
        assert_eq!(request.len(), 3);
        assert_eq!(request.messages()[1], json!({"role": "assistant", "content": "Yes."}));
        assert_eq!(request.messages()[2]["content"], "How much?");
    }

    #[test]
    fn accepts_empty_array() {
        let request = ChatRequest::from_value(json!({"messages": []})).unwrap();
        assert!(request.is_empty());
    }

    #[test]
    fn keeps_elements_exactly_as_sent() {
        let turns = json!([
            {"role": "user", "content": [{"type": "text", "text": "hi"}]},
            {"role": "user", "content": "hi", "cache_control": {"type": "ephemeral"}},
            {"role": "system", "content": "left for upstream to judge"},
            "not even an object"
        ]);
        let request = ChatRequest::from_value(json!({"messages": turns.clone()})).unwrap();
        assert_eq!(Value::Array(request.into_messages()), turns);
    }

    #[test]
    fn rejects_missing_null_and_non_array() {
        for body in [
            json!({}),
            json!({"messages": null}),
            json!({"messages": "hello"}),
            json!({"messages": {"role": "user", "content": "hi"}}),
            json!({"messages": 3}),
            json!([{"role": "user", "content": "hi"}]),
            json!(null),
        ] {
            let err = ChatRequest::from_value(body.clone()).unwrap_err();
            assert!(err.is_invalid_input(), "body {body} should be rejected");
        }
    }

    #[test]
    fn from_turns_builds_wire_form() {
        let request = ChatRequest::from_turns([ConversationTurn::user("Hi")]);
        assert_eq!(request.messages(), &[json!({"role": "user", "content": "Hi"})]);
    }
}
