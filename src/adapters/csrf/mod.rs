//! Anti-forgery token adapters.

mod cookie_token_service;

pub use cookie_token_service::CookieCsrfTokenService;
