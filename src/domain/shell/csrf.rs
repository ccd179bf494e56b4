//! Anti-forgery token and the cookie that carries it.

use serde::Deserialize;
use std::fmt;
use uuid::Uuid;

/// Length of a CSRF token in characters.
pub const CSRF_TOKEN_LENGTH: usize = 32;

/// Opaque anti-forgery secret: 32 ASCII alphanumeric characters.
#[derive(Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    /// Generates a fresh random token.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Accepts an incoming cookie value if it is well formed.
    pub fn parse(value: &str) -> Option<Self> {
        let well_formed = value.len() == CSRF_TOKEN_LENGTH
            && value.chars().all(|c| c.is_ascii_alphanumeric());
        well_formed.then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep the secret out of logs.
impl fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CsrfToken(..)")
    }
}

/// `SameSite` cookie attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    #[default]
    Lax,
    Strict,
    None,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SameSite::Lax => "Lax",
            SameSite::Strict => "Strict",
            SameSite::None => "None",
        };
        write!(f, "{}", s)
    }
}

/// Cookie attributes applied to the anti-forgery cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieAttributes {
    pub path: String,
    pub domain: Option<String>,
    pub max_age_secs: u64,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
}

impl Default for CookieAttributes {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            domain: None,
            max_age_secs: 60 * 60 * 24 * 7 * 52,
            secure: false,
            http_only: false,
            same_site: SameSite::Lax,
        }
    }
}

/// The anti-forgery cookie to set on a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfCookie {
    pub name: String,
    pub token: CsrfToken,
    pub attributes: CookieAttributes,
}

impl CsrfCookie {
    pub fn new(name: impl Into<String>, token: CsrfToken, attributes: CookieAttributes) -> Self {
        Self {
            name: name.into(),
            token,
            attributes,
        }
    }

    /// Renders the value of a `Set-Cookie` header.
    pub fn to_header_value(&self) -> String {
        let attrs = &self.attributes;
        let mut header = format!(
            "{}={}; Path={}; Max-Age={}",
            self.name,
            self.token.as_str(),
            attrs.path,
            attrs.max_age_secs
        );
        if let Some(domain) = &attrs.domain {
            header.push_str(&format!("; Domain={}", domain));
        }
        header.push_str(&format!("; SameSite={}", attrs.same_site));
        if attrs.secure {
            header.push_str("; Secure");
        }
        if attrs.http_only {
            header.push_str("; HttpOnly");
        }
        header
    }
}
