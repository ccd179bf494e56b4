//! Application shell domain.
//!
//! Types describing a single shell page render:
//! - `Scope` - which view variant handles the request
//! - `RequestContext` / `RenderContext` - inputs to the template
//! - `CsrfToken` / `CsrfCookie` - the anti-forgery cookie
//! - `FlashMessage` - one-time banners such as the demo disclaimer
//! - `FirstEventPending` - onboarding event

mod csrf;
mod errors;
mod events;
mod message;
mod render_context;
mod request;
mod scope;

pub use csrf::{CookieAttributes, CsrfCookie, CsrfToken, SameSite, CSRF_TOKEN_LENGTH};
pub use errors::{ShellError, TemplateError};
pub use events::{FirstEventPending, FIRST_EVENT_PENDING};
pub use message::{FlashMessage, MessageLevel, DEMO_DISCLAIMER};
pub use render_context::{is_demo_path, RenderContext, DEMO_PATH_PREFIX};
pub use request::{Principal, RequestContext, ONBOARDING_PARAM, PROJECT_SLUG_PARAM};
pub use scope::Scope;
