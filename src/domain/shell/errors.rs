//! Errors raised while rendering the shell.

use thiserror::Error;

use crate::domain::foundation::DomainError;

/// Failures of the template collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template not found: {0}")]
    NotFound(String),

    #[error("template rendering failed: {0}")]
    Render(String),
}

/// Fatal errors of a shell render. Side-effect failures never surface here.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("anti-forgery token service failed: {0}")]
    TokenService(DomainError),

    #[error(transparent)]
    Template(#[from] TemplateError),
}
