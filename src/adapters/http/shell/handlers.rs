//! HTTP handlers for the application shell.
//!
//! Every page route renders the same shell; routes differ only in the scope
//! they resolve to.

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

use axum::async_trait;
use axum::extract::{FromRequestParts, Path, Query, State};
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use axum_messages::Messages;
use tower_sessions::cookie::Cookie;
use tracing::{debug, error};

use crate::adapters::messages::SessionMessageQueue;
use crate::application::handlers::shell::{
    PageRenderer, ResolveScopeHandler, ResolveScopeQuery, ShellResponse, TakeMessagesHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::shell::{Principal, RequestContext, ShellError};
use crate::ports::{
    CsrfTokenService, EventPublisher, OrganizationRepository, ProjectRepository, TemplateRenderer,
};

use super::dto::{ErrorResponse, MessagesResponse};

/// Route parameter naming the organization.
pub const ORGANIZATION_SLUG_PARAM: &str = "organization_slug";

const NOT_FOUND_PAGE: &str = "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>Not Found</title></head><body><h1>Not Found</h1><p>The page you requested does not exist.</p></body></html>";

const SERVER_ERROR_PAGE: &str = "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>Server Error</title></head><body><h1>Server Error</h1><p>Something went wrong. Please try again later.</p></body></html>";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state of the shell routes.
///
/// Flash messages live in the caller's session, so the renderer is assembled
/// per request around that session's message queue.
#[derive(Clone)]
pub struct ShellAppState {
    pub csrf_cookie_name: String,
    pub templates: Arc<dyn TemplateRenderer>,
    pub csrf: Arc<dyn CsrfTokenService>,
    pub projects: Arc<dyn ProjectRepository>,
    pub organizations: Arc<dyn OrganizationRepository>,
    pub event_publisher: Arc<dyn EventPublisher>,
}

impl ShellAppState {
    pub fn resolve_scope_handler(&self) -> ResolveScopeHandler {
        ResolveScopeHandler::new(self.organizations.clone())
    }

    pub fn page_renderer(&self, messages: Messages) -> PageRenderer {
        PageRenderer::new(
            self.csrf_cookie_name.clone(),
            self.templates.clone(),
            self.csrf.clone(),
            self.projects.clone(),
            self.event_publisher.clone(),
            Arc::new(SessionMessageQueue::new(messages)),
        )
    }

    pub fn take_messages_handler(&self, messages: Messages) -> TakeMessagesHandler {
        TakeMessagesHandler::new(Arc::new(SessionMessageQueue::new(messages)))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Request extraction
// ════════════════════════════════════════════════════════════════════════════════

/// The request as seen by the renderer.
///
/// Never rejects: unparseable query strings and missing route parameters
/// simply yield empty maps.
#[derive(Debug, Clone)]
pub struct ShellRequest(pub RequestContext);

#[async_trait]
impl FromRequestParts<ShellAppState> for ShellRequest {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ShellAppState,
    ) -> Result<Self, Self::Rejection> {
        let mut request = RequestContext::new(parts.uri.path());

        if let Ok(Query(query)) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri) {
            request = request.with_query(query);
        }

        if let Ok(Path(params)) =
            Path::<HashMap<String, String>>::from_request_parts(parts, state).await
        {
            for (key, value) in params {
                request = request.with_route_param(key, value);
            }
        }

        if let Some(token) = cookie_value(parts, &state.csrf_cookie_name) {
            request = request.with_csrf_cookie(token);
        }

        if let Some(principal) = parts.extensions.get::<Principal>() {
            request = request.with_principal(principal.clone());
        }

        Ok(ShellRequest(request))
    }
}

/// Value of the first cookie called `name`, surrounding quotes removed.
fn cookie_value(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value_trimmed().to_string())
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

impl IntoResponse for ShellResponse {
    fn into_response(self) -> Response {
        let cookie = match HeaderValue::from_str(&self.csrf_cookie.to_header_value()) {
            Ok(cookie) => cookie,
            Err(e) => {
                error!("CSRF cookie is not a valid header value: {}", e);
                return server_error_page();
            }
        };

        let mut response = (self.status, self.body).into_response();
        let headers = response.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(self.content_type));
        headers.insert(SET_COOKIE, cookie);
        response
    }
}

fn not_found_page() -> Response {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response()
}

fn server_error_page() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Html(SERVER_ERROR_PAGE)).into_response()
}

fn scope_error_page(e: DomainError) -> Response {
    match e.code {
        ErrorCode::OrganizationNotFound => {
            debug!("Unknown organization: {}", e);
            not_found_page()
        }
        _ => {
            error!("Failed to resolve scope: {}", e);
            server_error_page()
        }
    }
}

fn shell_error_page(e: ShellError) -> Response {
    error!("Failed to render shell: {}", e);
    server_error_page()
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

async fn render(
    state: &ShellAppState,
    messages: Messages,
    request: RequestContext,
    query: ResolveScopeQuery,
) -> Response {
    let scope = match state.resolve_scope_handler().handle(query).await {
        Ok(scope) => scope,
        Err(e) => return scope_error_page(e),
    };

    let renderer = state.page_renderer(messages);
    match renderer.render_shell(&request, &scope).await {
        Ok(response) => response.into_response(),
        Err(e) => shell_error_page(e),
    }
}

/// GET / and every unmatched path
pub async fn generic_shell(
    State(state): State<ShellAppState>,
    messages: Messages,
    ShellRequest(request): ShellRequest,
) -> Response {
    render(&state, messages, request, ResolveScopeQuery::generic(false)).await
}

/// GET /demo/
pub async fn demo_shell(
    State(state): State<ShellAppState>,
    messages: Messages,
    ShellRequest(request): ShellRequest,
) -> Response {
    render(&state, messages, request, ResolveScopeQuery::generic(true)).await
}

/// GET /organizations/:organization_slug/[projects/:project_slug/]
pub async fn organization_shell(
    State(state): State<ShellAppState>,
    messages: Messages,
    ShellRequest(request): ShellRequest,
) -> Response {
    let query = organization_query(&request, false);
    render(&state, messages, request, query).await
}

/// GET /demo/organizations/:organization_slug/[projects/:project_slug/]
pub async fn organization_demo_shell(
    State(state): State<ShellAppState>,
    messages: Messages,
    ShellRequest(request): ShellRequest,
) -> Response {
    let query = organization_query(&request, true);
    render(&state, messages, request, query).await
}

fn organization_query(request: &RequestContext, demo: bool) -> ResolveScopeQuery {
    match request.route_param(ORGANIZATION_SLUG_PARAM) {
        Some(slug) => ResolveScopeQuery::organization(slug, demo),
        None => ResolveScopeQuery::generic(demo),
    }
}

/// GET /api/messages
pub async fn take_messages(
    State(state): State<ShellAppState>,
    messages: Messages,
    ShellRequest(request): ShellRequest,
) -> Response {
    match state.take_messages_handler(messages).handle(&request).await {
        Ok(messages) => Json(MessagesResponse::from(messages)).into_response(),
        Err(e) => {
            error!("Failed to drain messages: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.code.to_string(), "Failed to load messages")),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shell::{CookieAttributes, CsrfCookie, CsrfToken};
    use axum::http::Request;

    fn parts(cookie_headers: &[&str]) -> Parts {
        let mut builder = Request::builder().uri("/");
        for header in cookie_headers {
            builder = builder.header(COOKIE, *header);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn finds_cookie_across_headers() {
        let parts = parts(&["sessionid=s-1; theme=dark", "csrftoken=abc"]);

        assert_eq!(cookie_value(&parts, "csrftoken").as_deref(), Some("abc"));
        assert_eq!(cookie_value(&parts, "theme").as_deref(), Some("dark"));
        assert_eq!(cookie_value(&parts, "missing"), None);
    }

    #[test]
    fn first_cookie_occurrence_wins_and_quotes_are_stripped() {
        let parts = parts(&["junk; a=\"1\"; a=2"]);

        assert_eq!(cookie_value(&parts, "a").as_deref(), Some("1"));
    }

    #[test]
    fn shell_response_sets_content_type_and_cookie() {
        let response = ShellResponse {
            status: StatusCode::OK,
            content_type: "text/html",
            body: "<html></html>".to_string(),
            csrf_cookie: CsrfCookie::new(
                "csrftoken",
                CsrfToken::generate(),
                CookieAttributes::default(),
            ),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "text/html");
        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("csrftoken="));
    }

    #[test]
    fn unknown_organization_maps_to_not_found() {
        let response = scope_error_page(DomainError::new(
            ErrorCode::OrganizationNotFound,
            "Organization not found",
        ));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = scope_error_page(DomainError::new(ErrorCode::DatabaseError, "down"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn organization_query_uses_route_param() {
        let request = RequestContext::new("/organizations/acme/")
            .with_route_param(ORGANIZATION_SLUG_PARAM, "acme");

        let query = organization_query(&request, true);

        assert_eq!(query.organization_slug.as_deref(), Some("acme"));
        assert!(query.demo);
    }
}
