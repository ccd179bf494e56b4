//! Per-request view of an incoming shell request.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::foundation::UserId;

/// Query parameter that asks for onboarding to be tracked.
pub const ONBOARDING_PARAM: &str = "onboarding";

/// Route parameter carrying the project slug.
pub const PROJECT_SLUG_PARAM: &str = "project_slug";

/// The authenticated principal behind a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub id: UserId,
    pub username: String,
}

impl Principal {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}

/// Read-only context of an incoming request.
///
/// Built by the HTTP layer and handed to the renderer. The CSRF cookie never
/// leaves the server, so it is not serialized into the render context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestContext {
    path: String,
    principal: Option<Principal>,
    query: BTreeMap<String, String>,
    route_params: BTreeMap<String, String>,
    #[serde(skip)]
    csrf_cookie: Option<String>,
}

impl RequestContext {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_principal(mut self, principal: Principal) -> Self {
        self.principal = Some(principal);
        self
    }

    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn with_query(mut self, query: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(query);
        self
    }

    pub fn with_route_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.route_params.insert(key.into(), value.into());
        self
    }

    pub fn with_csrf_cookie(mut self, value: impl Into<String>) -> Self {
        self.csrf_cookie = Some(value.into());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    pub fn route_param(&self, key: &str) -> Option<&str> {
        self.route_params.get(key).map(String::as_str)
    }

    /// Incoming anti-forgery cookie value, unvalidated.
    pub fn csrf_cookie(&self) -> Option<&str> {
        self.csrf_cookie.as_deref()
    }

    /// A flag counts as set when the parameter has a non-empty value.
    pub fn has_flag(&self, key: &str) -> bool {
        self.query_param(key).is_some_and(|v| !v.is_empty())
    }

    pub fn onboarding_requested(&self) -> bool {
        self.has_flag(ONBOARDING_PARAM)
    }

    pub fn project_slug(&self) -> Option<&str> {
        self.route_param(PROJECT_SLUG_PARAM)
    }

    /// Username of the principal, or an empty string for anonymous requests.
    pub fn username(&self) -> &str {
        self.principal
            .as_ref()
            .map(|p| p.username.as_str())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_requires_non_empty_value() {
        let request = RequestContext::new("/").with_query_param("onboarding", "");
        assert!(!request.onboarding_requested());

        let request = RequestContext::new("/").with_query_param("onboarding", "1");
        assert!(request.onboarding_requested());

        assert!(!RequestContext::new("/").onboarding_requested());
    }

    #[test]
    fn project_slug_comes_from_route_params_not_query() {
        let request = RequestContext::new("/organizations/acme/")
            .with_query_param(PROJECT_SLUG_PARAM, "web");
        assert_eq!(request.project_slug(), None);

        let request = request.with_route_param(PROJECT_SLUG_PARAM, "api");
        assert_eq!(request.project_slug(), Some("api"));
    }

    #[test]
    fn username_is_empty_for_anonymous() {
        assert_eq!(RequestContext::new("/").username(), "");

        let principal = Principal::new(UserId::new("u-1").unwrap(), "jane");
        let request = RequestContext::new("/").with_principal(principal);
        assert_eq!(request.username(), "jane");
    }

    #[test]
    fn serialization_hides_csrf_cookie() {
        let request = RequestContext::new("/").with_csrf_cookie("secret-token");

        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("secret-token"));
        assert!(json.contains("\"path\":\"/\""));
    }
}
