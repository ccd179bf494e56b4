//! Anti-forgery cookie configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;
use crate::domain::shell::{CookieAttributes, SameSite};

/// CSRF cookie configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CsrfConfig {
    /// Name of the cookie carrying the token; also exposed to the page script
    pub cookie_name: String,

    pub cookie_path: String,

    pub cookie_domain: Option<String>,

    /// Cookie lifetime in seconds
    pub cookie_age_secs: u64,

    pub cookie_secure: bool,

    /// Off by default so the page script can read the token
    pub cookie_http_only: bool,

    pub cookie_same_site: SameSite,

    /// Keep a well-formed incoming token instead of issuing a new one
    pub reuse_existing: bool,
}

impl CsrfConfig {
    /// Attributes applied to every issued cookie.
    pub fn cookie_attributes(&self) -> CookieAttributes {
        CookieAttributes {
            path: self.cookie_path.clone(),
            domain: self.cookie_domain.clone(),
            max_age_secs: self.cookie_age_secs,
            secure: self.cookie_secure,
            http_only: self.cookie_http_only,
            same_site: self.cookie_same_site,
        }
    }

    /// Validate CSRF configuration
    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        validate_cookie_name(&self.cookie_name)?;
        if self.cookie_age_secs == 0 {
            return Err(ValidationError::InvalidCookieAge);
        }
        if self.cookie_same_site == SameSite::None && !self.cookie_secure {
            return Err(ValidationError::SameSiteNoneRequiresSecure);
        }
        if environment == Environment::Production && !self.cookie_secure {
            return Err(ValidationError::CookieMustBeSecure);
        }
        Ok(())
    }
}

impl Default for CsrfConfig {
    fn default() -> Self {
        let attributes = CookieAttributes::default();
        Self {
            cookie_name: "csrftoken".to_string(),
            cookie_path: attributes.path,
            cookie_domain: attributes.domain,
            cookie_age_secs: attributes.max_age_secs,
            cookie_secure: attributes.secure,
            cookie_http_only: attributes.http_only,
            cookie_same_site: attributes.same_site,
            reuse_existing: false,
        }
    }
}

/// Cookie names must be non-empty RFC 6265 tokens.
pub(crate) fn validate_cookie_name(name: &str) -> Result<(), ValidationError> {
    const SEPARATORS: &str = "()<>@,;:\\\"/[]?={} \t";
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_graphic() && !SEPARATORS.contains(c));
    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidCookieName(name.to_string()))
    }
}
