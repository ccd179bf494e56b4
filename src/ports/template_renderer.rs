//! TemplateRenderer port - turns a render context into an HTML document.

use crate::domain::shell::{RenderContext, TemplateError};

/// Name of the application shell template.
pub const SHELL_TEMPLATE: &str = "shell";

/// Port for rendering named templates.
///
/// Rendering is CPU-bound and synchronous.
pub trait TemplateRenderer: Send + Sync {
    /// Render `template` with `context`.
    ///
    /// # Errors
    ///
    /// - `TemplateError::NotFound` for an unknown template name
    /// - `TemplateError::Render` when the engine fails
    fn render(&self, template: &str, context: &RenderContext<'_>) -> Result<String, TemplateError>;
}
