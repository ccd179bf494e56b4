//! Session configuration
//!
//! Sessions only carry flash messages, so they are created lazily on the
//! first queued message and expire after a period of inactivity.

use serde::Deserialize;

use super::csrf::validate_cookie_name;
use super::error::ValidationError;
use super::server::Environment;

/// Session cookie and store configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub cookie_name: String,

    pub cookie_secure: bool,

    /// Seconds without a request before a session is dropped
    pub idle_timeout_secs: u32,

    /// Upper bound on sessions held in memory; least recently used go first
    pub max_sessions: u64,
}

impl SessionConfig {
    /// Validate session configuration
    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        validate_cookie_name(&self.cookie_name)?;
        if self.idle_timeout_secs == 0 {
            return Err(ValidationError::InvalidSessionTimeout);
        }
        if self.max_sessions == 0 {
            return Err(ValidationError::InvalidSessionCapacity);
        }
        if environment == Environment::Production && !self.cookie_secure {
            return Err(ValidationError::SessionCookieMustBeSecure);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "sessionid".to_string(),
            cookie_secure: false,
            idle_timeout_secs: 1_209_600, // two weeks
            max_sessions: 10_000,
        }
    }
}
