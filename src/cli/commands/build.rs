//! Build command - index and forests in one run.

use super::{emit, load_model, report_error};
use crate::config::Settings;
use crate::docset::DocSet;
use crate::io::{ExitCode, OutputFormat};
use crate::render::renderer_for;
use std::path::Path;
use std::time::Instant;

pub fn run(model: Option<&Path>, format: OutputFormat, settings: &Settings) -> ExitCode {
    let started = Instant::now();
    let model = match load_model(model, settings) {
        Ok(model) => model,
        Err(e) => return report_error(format, &e),
    };

    let docset = match DocSet::build(&model, settings) {
        Ok(docset) => docset,
        Err(e) => return report_error(format, &e),
    };

    let renderer = renderer_for(format, Some(started.elapsed().as_millis() as u64));
    if docset.index.is_none()
        && docset.unnamed.is_empty()
        && docset.forests.iter().all(|forest| forest.is_empty())
    {
        return emit(
            renderer.render_not_found("Nothing documented to generate", None),
            ExitCode::NotFound,
        );
    }

    emit(renderer.render_docset(&docset), ExitCode::Success)
}
