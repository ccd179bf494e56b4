//! Adapters - Implementations of port interfaces.
//!
//! - `csrf` - cookie-based anti-forgery tokens
//! - `events` - in-process event bus and subscribers
//! - `http` - axum routes serving the shell
//! - `memory` - in-memory repositories
//! - `messages` - session-backed flash messages
//! - `postgres` - `sqlx` repositories
//! - `templates` - `rinja` template rendering

pub mod csrf;
pub mod events;
pub mod http;
pub mod memory;
pub mod messages;
pub mod postgres;
pub mod templates;

pub use csrf::CookieCsrfTokenService;
pub use events::{InMemoryEventBus, OnboardingLogHandler};
pub use memory::{InMemoryOrganizationRepository, InMemoryProjectRepository};
pub use messages::{session_layer, SessionMessageQueue};
pub use postgres::{PostgresOrganizationRepository, PostgresProjectRepository};
pub use templates::RinjaTemplateRenderer;
