//! PageRenderer - renders the application shell for every scope variant.

use std::sync::Arc;

use http::StatusCode;
use tracing::{debug, info, warn};

use crate::domain::foundation::SerializableDomainEvent;
use crate::domain::organization::{Organization, Slug};
use crate::domain::shell::{
    CsrfCookie, FirstEventPending, FlashMessage, RenderContext, RequestContext, Scope, ShellError,
};
use crate::ports::{
    CsrfTokenService, EventPublisher, MessageQueue, ProjectRepository, TemplateRenderer,
    SHELL_TEMPLATE,
};

/// Sender recorded on events emitted by the renderer.
pub const SHELL_SENDER: &str = "shell.page_renderer";

/// Content type of the rendered shell.
pub const TEXT_HTML: &str = "text/html";

/// A rendered shell page, ready to be turned into an HTTP response.
#[derive(Debug, Clone)]
pub struct ShellResponse {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
    pub csrf_cookie: CsrfCookie,
}

impl ShellResponse {
    fn html(body: String, csrf_cookie: CsrfCookie) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: TEXT_HTML,
            body,
            csrf_cookie,
        }
    }
}

/// Renders the shell page and runs the scope-specific side effects.
pub struct PageRenderer {
    csrf_cookie_name: String,
    templates: Arc<dyn TemplateRenderer>,
    csrf: Arc<dyn CsrfTokenService>,
    projects: Arc<dyn ProjectRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    messages: Arc<dyn MessageQueue>,
}

impl PageRenderer {
    pub fn new(
        csrf_cookie_name: impl Into<String>,
        templates: Arc<dyn TemplateRenderer>,
        csrf: Arc<dyn CsrfTokenService>,
        projects: Arc<dyn ProjectRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        messages: Arc<dyn MessageQueue>,
    ) -> Self {
        Self {
            csrf_cookie_name: csrf_cookie_name.into(),
            templates,
            csrf,
            projects,
            event_publisher,
            messages,
        }
    }

    /// Render the shell for `request` resolved to `scope`.
    ///
    /// Token and template failures are fatal. Failures of the onboarding
    /// event or the demo message are logged and do not affect the response.
    pub async fn render_shell(
        &self,
        request: &RequestContext,
        scope: &Scope,
    ) -> Result<ShellResponse, ShellError> {
        let context = RenderContext::build(request, &self.csrf_cookie_name);

        // The token must exist before rendering so the page script can read the cookie.
        let csrf_cookie = self
            .csrf
            .ensure_token(request)
            .map_err(ShellError::TokenService)?;

        let body = self.templates.render(SHELL_TEMPLATE, &context)?;
        let response = ShellResponse::html(body, csrf_cookie);

        debug!(
            path = request.path(),
            scope = scope.kind(),
            is_demo = context.is_demo,
            "Rendered application shell"
        );

        match scope {
            Scope::Organization { organization } => {
                if request.onboarding_requested() {
                    self.signal_first_event_pending(request, organization).await;
                }
            }
            Scope::GenericDemo | Scope::OrganizationDemo { .. } => {
                self.queue_demo_disclaimer(request).await;
            }
            Scope::Generic => {}
        }

        Ok(response)
    }

    async fn signal_first_event_pending(
        &self,
        request: &RequestContext,
        organization: &Organization,
    ) {
        let Some(raw_slug) = request.project_slug() else {
            return;
        };
        let slug = match Slug::new(raw_slug) {
            Ok(slug) => slug,
            Err(e) => {
                debug!(slug = raw_slug, "Ignoring unusable project slug: {}", e);
                return;
            }
        };

        let project = match self
            .projects
            .find_by_slug_in_organization(&organization.id, &slug)
            .await
        {
            Ok(Some(project)) => project,
            Ok(None) => {
                debug!(
                    organization = %organization.slug,
                    project = %slug,
                    "Onboarding project not found"
                );
                return;
            }
            Err(e) => {
                warn!(
                    organization = %organization.slug,
                    project = %slug,
                    "Project lookup failed: {}", e
                );
                return;
            }
        };

        let user_id = request.principal().map(|p| p.id.clone());
        let event = FirstEventPending::new(&project, user_id.clone(), SHELL_SENDER);
        let envelope = match event.to_envelope() {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(project = %project.slug, "Failed to serialize onboarding event: {}", e);
                return;
            }
        };
        let envelope = match user_id {
            Some(id) => envelope.with_user_id(id.to_string()),
            None => envelope,
        };

        match self.event_publisher.publish(envelope).await {
            Ok(()) => info!(
                organization = %organization.slug,
                project = %project.slug,
                "Published first_event_pending"
            ),
            Err(e) => warn!(
                project = %project.slug,
                "Failed to publish first_event_pending: {}", e
            ),
        }
    }

    async fn queue_demo_disclaimer(&self, request: &RequestContext) {
        if let Err(e) = self
            .messages
            .enqueue(request, FlashMessage::demo_disclaimer())
            .await
        {
            warn!(path = request.path(), "Failed to queue demo disclaimer: {}", e);
        }
    }
}
