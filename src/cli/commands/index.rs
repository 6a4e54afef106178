//! Index command - alphabetical name index.

use super::{emit, load_model, report_error};
use crate::config::Settings;
use crate::docset::DocSetError;
use crate::index::{IndexError, IndexMode, NameBucketer, Page, Paginator};
use crate::io::{ExitCode, OutputFormat};
use crate::render::renderer_for;
use std::path::Path;
use std::time::Instant;

const EMPTY_HINT: &str = "Only documented symbols with a non-empty name are indexed";

pub fn run(
    model: Option<&Path>,
    mode: Option<IndexMode>,
    format: OutputFormat,
    settings: &Settings,
) -> ExitCode {
    let started = Instant::now();
    let model = match load_model(model, settings) {
        Ok(model) => model,
        Err(e) => return report_error(format, &e),
    };
    let mode = mode.unwrap_or(settings.index.mode);

    let documented = model.documented();
    let partition = NameBucketer::new(settings.ordering).partition(documented.iter().copied());
    let unnamed = partition.unnamed;

    let pages = match Paginator::new(mode).paginate(partition.buckets) {
        Ok(pages) => pages,
        Err(IndexError::EmptyIndex) => Vec::new(),
    };
    let renderer = renderer_for(format, Some(started.elapsed().as_millis() as u64));

    if pages.iter().all(Page::is_empty) && unnamed.is_empty() {
        return emit(
            renderer.render_not_found("No documented names to index", Some(EMPTY_HINT)),
            ExitCode::NotFound,
        );
    }
    if pages.is_empty() {
        // Split mode with only unnamed symbols has no page to hang them on
        return report_error(format, &DocSetError::from(IndexError::EmptyIndex));
    }

    crate::log_event!("index", "rendered", "{} pages in {mode:?} mode", pages.len());
    emit(renderer.render_index(&pages, &unnamed), ExitCode::Success)
}
