//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the `config`
//! and `dotenvy` crates. Variables use the `APP_SHELL` prefix and `__` between
//! nesting levels.
//!
//! # Example
//!
//! ```no_run
//! use app_shell::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod csrf;
mod database;
mod error;
mod server;
mod session;

pub use csrf::CsrfConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig, MAX_REQUEST_TIMEOUT_SECS};
pub use session::SessionConfig;

use serde::Deserialize;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "APP_SHELL";

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub csrf: CsrfConfig,

    /// Sessions holding flash messages
    #[serde(default)]
    pub session: SessionConfig,

    /// PostgreSQL settings; in-memory repositories are used when absent
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` if present
    /// 2. Reads variables with the `APP_SHELL` prefix
    /// 3. Splits nested keys on `__`
    ///
    /// - `APP_SHELL__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `APP_SHELL__CSRF__COOKIE_NAME=xsrf` -> `csrf.cookie_name = "xsrf"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid value found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.csrf.validate(self.server.environment)?;
        self.session.validate(self.server.environment)?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            csrf: CsrfConfig::default(),
            session: SessionConfig::default(),
            database: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shell::SameSite;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests touching them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "APP_SHELL__SERVER__PORT",
        "APP_SHELL__SERVER__ENVIRONMENT",
        "APP_SHELL__CSRF__COOKIE_NAME",
        "APP_SHELL__CSRF__COOKIE_SECURE",
        "APP_SHELL__CSRF__COOKIE_SAME_SITE",
        "APP_SHELL__DATABASE__URL",
        "APP_SHELL__SESSION__COOKIE_NAME",
        "APP_SHELL__SESSION__MAX_SESSIONS",
    ];

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        for key in VARS {
            env::remove_var(key);
        }
        result
    }

    #[test]
    fn test_loads_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.csrf.cookie_name, "csrftoken");
        assert_eq!(config.session.cookie_name, "sessionid");
        assert!(config.database.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("APP_SHELL__SERVER__PORT", "3000"),
            ("APP_SHELL__CSRF__COOKIE_NAME", "xsrf"),
            ("APP_SHELL__CSRF__COOKIE_SECURE", "true"),
            ("APP_SHELL__CSRF__COOKIE_SAME_SITE", "strict"),
            ("APP_SHELL__DATABASE__URL", "postgres://localhost/shell"),
            ("APP_SHELL__SESSION__COOKIE_NAME", "shell_session"),
            ("APP_SHELL__SESSION__MAX_SESSIONS", "500"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.csrf.cookie_name, "xsrf");
        assert!(config.csrf.cookie_secure);
        assert_eq!(config.csrf.cookie_same_site, SameSite::Strict);
        assert_eq!(config.session.cookie_name, "shell_session");
        assert_eq!(config.session.max_sessions, 500);
        assert_eq!(
            config.database.as_ref().map(|d| d.url.as_str()),
            Some("postgres://localhost/shell")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_production_demands_secure_cookie() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("APP_SHELL__SERVER__ENVIRONMENT", "production")]).unwrap();

        assert!(config.is_production());
        assert_eq!(config.validate(), Err(ValidationError::CookieMustBeSecure));
    }

    #[test]
    fn test_session_cookie_name_is_validated() {
        let config = AppConfig {
            session: SessionConfig {
                cookie_name: "session id".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCookieName(_))
        ));
    }
}
