//! HTTP adapters.

pub mod shell;

use std::time::Duration;

use axum::Router;
use axum_messages::MessagesManagerLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tower_sessions::SessionManagerLayer;
use tower_sessions_moka_store::MokaStore;

pub use shell::{shell_router, ShellAppState};

/// Shell router with flash messages, request tracing and a request timeout.
pub fn app_router(
    state: ShellAppState,
    sessions: SessionManagerLayer<MokaStore>,
    request_timeout: Duration,
) -> Router {
    shell_router(state)
        .layer(MessagesManagerLayer)
        .layer(sessions)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}
