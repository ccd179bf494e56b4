//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Cannot bind to host '{0}'")]
    InvalidBindAddress(String),

    #[error("Invalid cookie name: {0}")]
    InvalidCookieName(String),

    #[error("Cookie age must be positive")]
    InvalidCookieAge,

    #[error("SameSite=None requires a Secure cookie")]
    SameSiteNoneRequiresSecure,

    #[error("CSRF cookie must be Secure in production")]
    CookieMustBeSecure,

    #[error("Session idle timeout must be positive")]
    InvalidSessionTimeout,

    #[error("Session store capacity must be positive")]
    InvalidSessionCapacity,

    #[error("Session cookie must be Secure in production")]
    SessionCookieMustBeSecure,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,
}
