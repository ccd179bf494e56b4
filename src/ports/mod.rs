//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the shell renderer and its collaborators. Adapters implement these ports.
//!
//! ## Event Ports
//!
//! - `EventPublisher` - Port for publishing domain events
//! - `EventSubscriber` - Port for subscribing to domain events
//! - `EventHandler` - Handler that processes incoming events
//!
//! ## Rendering Ports
//!
//! - `TemplateRenderer` - Named template rendering
//! - `CsrfTokenService` - Anti-forgery token issuing
//! - `MessageQueue` - One-time flash messages
//!
//! ## Repository Ports
//!
//! - `OrganizationRepository` - Organization lookup by slug
//! - `ProjectRepository` - Project lookup by slug within an organization

mod csrf_token_service;
mod event_publisher;
mod event_subscriber;
mod message_queue;
mod organization_repository;
mod project_repository;
mod template_renderer;

pub use csrf_token_service::CsrfTokenService;
pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventBus, EventHandler, EventSubscriber};
pub use message_queue::MessageQueue;
pub use organization_repository::OrganizationRepository;
pub use project_repository::ProjectRepository;
pub use template_renderer::{TemplateRenderer, SHELL_TEMPLATE};
