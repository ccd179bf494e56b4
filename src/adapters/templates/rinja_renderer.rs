//! Compile-time templates rendered with `rinja`.
//!
//! Templates live in `templates/` at the crate root and are checked at build
//! time. Values are HTML-escaped.

use rinja::Template;

use crate::domain::shell::{RenderContext, TemplateError};
use crate::ports::{TemplateRenderer, SHELL_TEMPLATE};

#[derive(Template)]
#[template(path = "shell.html")]
struct ShellTemplate<'a> {
    ctx: &'a RenderContext<'a>,
}

/// Renders the templates known at compile time by name.
#[derive(Debug, Default, Clone, Copy)]
pub struct RinjaTemplateRenderer;

impl RinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for RinjaTemplateRenderer {
    fn render(&self, template: &str, context: &RenderContext<'_>) -> Result<String, TemplateError> {
        match template {
            SHELL_TEMPLATE => ShellTemplate { ctx: context }
                .render()
                .map_err(|e| TemplateError::Render(e.to_string())),
            other => Err(TemplateError::NotFound(other.to_string())),
        }
    }
}
