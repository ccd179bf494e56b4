//! HTTP routes for the application shell.

use axum::{routing::get, Router};

use super::handlers::{
    demo_shell, generic_shell, organization_demo_shell, organization_shell, take_messages,
    ShellAppState,
};

/// Creates the shell router. Unmatched paths render the generic shell.
pub fn shell_router(state: ShellAppState) -> Router {
    Router::new()
        .route("/", get(generic_shell))
        .route("/organizations/:organization_slug/", get(organization_shell))
        .route(
            "/organizations/:organization_slug/projects/:project_slug/",
            get(organization_shell),
        )
        .route("/demo/", get(demo_shell))
        .route(
            "/demo/organizations/:organization_slug/",
            get(organization_demo_shell),
        )
        .route(
            "/demo/organizations/:organization_slug/projects/:project_slug/",
            get(organization_demo_shell),
        )
        .route("/api/messages", get(take_messages))
        .fallback(generic_shell)
        .with_state(state)
}
