//! Enveloped JSON output.

use super::{RenderResult, Renderer};
use crate::docset::DocSet;
use crate::hierarchy::Forest;
use crate::index::Page;
use crate::io::{EntityType, Envelope, ResultCode};
use crate::symbol::Symbol;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    duration_ms: Option<u64>,
}

#[derive(Serialize)]
struct IndexView<'a, 'm> {
    pages: &'a [Page<'m>],
    unnamed: &'a [&'m Symbol],
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration_ms(mut self, duration_ms: Option<u64>) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    fn finish<T: Serialize>(&self, mut envelope: Envelope<T>) -> RenderResult<String> {
        if let Some(duration_ms) = self.duration_ms {
            envelope = envelope.with_duration_ms(duration_ms);
        }
        Ok(envelope.to_json()?)
    }
}

impl Renderer for JsonRenderer {
    fn render_index(&self, pages: &[Page<'_>], unnamed: &[&Symbol]) -> RenderResult<String> {
        let symbols: usize = pages.iter().map(Page::symbol_count).sum();
        let envelope = Envelope::success(IndexView { pages, unnamed })
            .with_entity_type(EntityType::IndexPages)
            .with_count(pages.len())
            .with_message(format!("{} index pages, {symbols} entries", pages.len()));
        self.finish(envelope)
    }

    fn render_forests(&self, forests: &[Forest<'_>]) -> RenderResult<String> {
        let nodes: usize = forests.iter().map(Forest::node_count).sum();
        let envelope = Envelope::success(forests)
            .with_entity_type(EntityType::Forests)
            .with_count(forests.len())
            .with_message(format!("{} forests, {nodes} nodes", forests.len()));
        self.finish(envelope)
    }

    fn render_docset(&self, docset: &DocSet<'_>) -> RenderResult<String> {
        let pages = docset.index.as_ref().map_or(0, Vec::len);
        let envelope = Envelope::success(docset)
            .with_entity_type(EntityType::DocSet)
            .with_count(pages + docset.forests.len())
            .with_message(format!(
                "{pages} index pages, {} forests",
                docset.forests.len()
            ));
        self.finish(envelope)
    }

    fn render_not_found(&self, message: &str, hint: Option<&str>) -> RenderResult<String> {
        let mut envelope: Envelope<()> = Envelope::not_found(message);
        if let Some(hint) = hint {
            envelope = envelope.with_hint(hint);
        }
        self.finish(envelope)
    }

    fn render_error(&self, code: ResultCode, message: &str) -> RenderResult<String> {
        self.finish(Envelope::<()>::error(code, message))
    }
}
