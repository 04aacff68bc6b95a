use serde::{Deserialize, Serialize};

use crate::domain::{ChatReply, HealthStatus};

pub const INVALID_REQUEST_ERROR: &str = "Invalid request. Messages array is required.";
pub const CHAT_FAILED_ERROR: &str = "Failed to process chat request";
pub const CHAT_FAILED_MESSAGE: &str =
    "Sorry, I encountered an error. Please try again or contact us directly.";

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatSuccessBody {
    pub message: String,
    pub success: bool,
}

impl From<ChatReply> for ChatSuccessBody {
    fn from(reply: ChatReply) -> Self {
        Self {
            message: reply.into_message(),
            success: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn invalid_request() -> Self {
        Self {
            error: INVALID_REQUEST_ERROR.to_string(),
            message: None,
        }
    }

    pub fn chat_failed() -> Self {
        Self {
            error: CHAT_FAILED_ERROR.to_string(),
            message: Some(CHAT_FAILED_MESSAGE.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: String,
    pub message: String,
}

impl From<HealthStatus> for HealthBody {
    fn from(health: HealthStatus) -> Self {
        Self {
            status: health.status().to_string(),
            message: health.message().to_string(),
        }
    }
}
