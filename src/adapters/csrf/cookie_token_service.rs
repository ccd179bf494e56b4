//! Cookie-based anti-forgery token service.
//!
//! Tokens travel in a cookie readable by the page script, which echoes the
//! value back in a request header on unsafe requests.

use tracing::trace;

use crate::config::CsrfConfig;
use crate::domain::foundation::DomainError;
use crate::domain::shell::{CookieAttributes, CsrfCookie, CsrfToken, RequestContext};
use crate::ports::CsrfTokenService;

/// Issues tokens as cookies.
///
/// With `reuse_existing` a well-formed incoming cookie is kept and only its
/// expiry is refreshed. Otherwise every call rotates the token.
#[derive(Debug, Clone)]
pub struct CookieCsrfTokenService {
    cookie_name: String,
    attributes: CookieAttributes,
    reuse_existing: bool,
}

impl CookieCsrfTokenService {
    pub fn new(cookie_name: impl Into<String>, attributes: CookieAttributes) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            attributes,
            reuse_existing: false,
        }
    }

    pub fn from_config(config: &CsrfConfig) -> Self {
        Self::new(config.cookie_name.clone(), config.cookie_attributes())
            .reuse_existing(config.reuse_existing)
    }

    pub fn reuse_existing(mut self, reuse: bool) -> Self {
        self.reuse_existing = reuse;
        self
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }
}

impl CsrfTokenService for CookieCsrfTokenService {
    fn ensure_token(&self, request: &RequestContext) -> Result<CsrfCookie, DomainError> {
        let reused = self
            .reuse_existing
            .then(|| request.csrf_cookie().and_then(CsrfToken::parse))
            .flatten();

        let token = match reused {
            Some(token) => {
                trace!("Reusing incoming CSRF token");
                token
            }
            None => CsrfToken::generate(),
        };

        Ok(CsrfCookie::new(
            self.cookie_name.clone(),
            token,
            self.attributes.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shell::{SameSite, CSRF_TOKEN_LENGTH};

    const INCOMING: &str = "0123456789abcdef0123456789ABCDEF";

    #[test]
    fn issues_fresh_token_each_call_by_default() {
        let service = CookieCsrfTokenService::from_config(&CsrfConfig::default());
        let request = RequestContext::new("/").with_csrf_cookie(INCOMING);

        let a = service.ensure_token(&request).unwrap();
        let b = service.ensure_token(&request).unwrap();

        assert_eq!(a.name, "csrftoken");
        assert_eq!(a.token.as_str().len(), CSRF_TOKEN_LENGTH);
        assert_ne!(a.token, b.token);
        assert_ne!(a.token.as_str(), INCOMING);
    }

    #[test]
    fn reuses_well_formed_incoming_token_when_enabled() {
        let service =
            CookieCsrfTokenService::from_config(&CsrfConfig::default()).reuse_existing(true);
        let request = RequestContext::new("/").with_csrf_cookie(INCOMING);

        let cookie = service.ensure_token(&request).unwrap();

        assert_eq!(cookie.token.as_str(), INCOMING);
    }

    #[test]
    fn replaces_malformed_incoming_token() {
        let service =
            CookieCsrfTokenService::from_config(&CsrfConfig::default()).reuse_existing(true);
        let request = RequestContext::new("/").with_csrf_cookie("short");

        let cookie = service.ensure_token(&request).unwrap();

        assert_ne!(cookie.token.as_str(), "short");
        assert_eq!(cookie.token.as_str().len(), CSRF_TOKEN_LENGTH);
    }

    #[test]
    fn cookie_carries_configured_attributes() {
        let config = CsrfConfig {
            cookie_name: "xsrf".to_string(),
            cookie_domain: Some("example.com".to_string()),
            cookie_secure: true,
            cookie_same_site: SameSite::Strict,
            ..Default::default()
        };
        let service = CookieCsrfTokenService::from_config(&config);

        let header = service
            .ensure_token(&RequestContext::new("/"))
            .unwrap()
            .to_header_value();

        assert!(header.starts_with("xsrf="));
        assert!(header.contains("; Path=/"));
        assert!(header.contains("; Domain=example.com"));
        assert!(header.contains("; SameSite=Strict"));
        assert!(header.contains("; Secure"));
        assert!(!header.contains("HttpOnly"));
    }
}
