//! Context handed to the shell template.

use serde::Serialize;

use super::RequestContext;

/// Requests under this path prefix render the demo shell.
pub const DEMO_PATH_PREFIX: &str = "/demo/";

/// Returns true when `path` addresses the demo area.
pub fn is_demo_path(path: &str) -> bool {
    path.starts_with(DEMO_PATH_PREFIX)
}

/// Template context for the application shell.
///
/// Serializes to exactly three keys: `is_demo`, `request` and
/// `CSRF_COOKIE_NAME`. `is_demo` is computed from the request path only.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext<'a> {
    pub is_demo: bool,
    pub request: &'a RequestContext,
    #[serde(rename = "CSRF_COOKIE_NAME")]
    pub csrf_cookie_name: &'a str,
}

impl<'a> RenderContext<'a> {
    pub fn build(request: &'a RequestContext, csrf_cookie_name: &'a str) -> Self {
        Self {
            is_demo: is_demo_path(request.path()),
            request,
            csrf_cookie_name,
        }
    }
}
