//! HTTP adapter for the application shell.
//!
//! - `GET /` - generic shell
//! - `GET /organizations/:organization_slug/` - organization shell
//! - `GET /organizations/:organization_slug/projects/:project_slug/` - project shell
//! - `GET /demo/` - demo shell
//! - `GET /demo/organizations/:organization_slug/[projects/:project_slug/]` - demo organization shell
//! - `GET /api/messages` - drain queued flash messages
//!
//! Any other path renders the generic shell so the client router can take over.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, MessageResponse, MessagesResponse};
pub use handlers::{ShellAppState, ShellRequest, ORGANIZATION_SLUG_PARAM};
pub use routes::shell_router;
