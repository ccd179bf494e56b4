//! CsrfTokenService port - guarantees an anti-forgery token per response.

use crate::domain::foundation::DomainError;
use crate::domain::shell::{CsrfCookie, RequestContext};

/// Port for issuing anti-forgery tokens.
pub trait CsrfTokenService: Send + Sync {
    /// Return the cookie to set on the response for `request`, generating a
    /// token when the request does not carry a usable one.
    ///
    /// # Errors
    ///
    /// - `TokenServiceError` when no token can be produced
    fn ensure_token(&self, request: &RequestContext) -> Result<CsrfCookie, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csrf_token_service_is_object_safe() {
        fn _accepts_dyn(_service: &dyn CsrfTokenService) {}
    }
}
