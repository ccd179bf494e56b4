//! Response DTOs for the shell API endpoints.

use serde::Serialize;

use crate::domain::shell::{FlashMessage, MessageLevel};

/// A single flash message as exposed to the page script.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub level: MessageLevel,
    pub text: String,
}

impl From<FlashMessage> for MessageResponse {
    fn from(message: FlashMessage) -> Self {
        Self {
            level: message.level,
            text: message.text,
        }
    }
}

/// Body of `GET /api/messages`.
#[derive(Debug, Clone, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<MessageResponse>,
}

impl From<Vec<FlashMessage>> for MessagesResponse {
    fn from(messages: Vec<FlashMessage>) -> Self {
        Self {
            messages: messages.into_iter().map(MessageResponse::from).collect(),
        }
    }
}

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}
