//! Turning index pages and forests into output text.
//!
//! Both renderers consume the same [`DocSet`] pieces; the CLI picks one from
//! the requested [`OutputFormat`](crate::io::OutputFormat).

mod json;
mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;

use crate::docset::DocSet;
use crate::hierarchy::Forest;
use crate::index::Page;
use crate::io::{OutputFormat, ResultCode};
use crate::symbol::Symbol;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Formatting failed")]
    Fmt(#[from] std::fmt::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;

pub trait Renderer {
    /// Index pages in chain order, followed by the unnamed scope.
    fn render_index(&self, pages: &[Page<'_>], unnamed: &[&Symbol]) -> RenderResult<String>;

    fn render_forests(&self, forests: &[Forest<'_>]) -> RenderResult<String>;

    fn render_docset(&self, docset: &DocSet<'_>) -> RenderResult<String>;

    /// Successful run that produced nothing to show.
    fn render_not_found(&self, message: &str, hint: Option<&str>) -> RenderResult<String>;

    fn render_error(&self, code: ResultCode, message: &str) -> RenderResult<String>;
}

/// Renderer for `format`; JSON output carries the run time when given.
pub fn renderer_for(format: OutputFormat, duration_ms: Option<u64>) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Json => Box::new(JsonRenderer::new().with_duration_ms(duration_ms)),
        OutputFormat::Text => Box::new(TextRenderer::new()),
    }
}
