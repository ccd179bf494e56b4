//! Template rendering adapters.

mod rinja_renderer;

pub use rinja_renderer::RinjaTemplateRenderer;
