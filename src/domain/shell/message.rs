//! One-time user-facing banner messages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Banner shown to visitors of the demo area.
pub const DEMO_DISCLAIMER: &str = "This is a DEMO. Data will not be written to database and you are logged in as dummy user. This is a playground with dummy/demo data! Feel free to mess around!";

/// Severity of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Debug,
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MessageLevel::Debug => "debug",
            MessageLevel::Info => "info",
            MessageLevel::Success => "success",
            MessageLevel::Warning => "warning",
            MessageLevel::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// A message queued for display on the client's next page load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: MessageLevel,
    pub text: String,
}

impl FlashMessage {
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, text)
    }

    /// The fixed warning attached to every demo page view.
    pub fn demo_disclaimer() -> Self {
        Self::warning(DEMO_DISCLAIMER)
    }
}
