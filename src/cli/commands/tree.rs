//! Tree command - inheritance forests.

use super::{emit, load_model, report_error};
use crate::config::Settings;
use crate::docset::DocSetError;
use crate::hierarchy::HierarchyBuilder;
use crate::io::{ExitCode, OutputFormat};
use crate::render::renderer_for;
use crate::types::SymbolKind;
use std::path::Path;
use std::time::Instant;

pub fn run(
    model: Option<&Path>,
    kind: Option<SymbolKind>,
    format: OutputFormat,
    settings: &Settings,
) -> ExitCode {
    let started = Instant::now();
    let model = match load_model(model, settings) {
        Ok(model) => model,
        Err(e) => return report_error(format, &e),
    };

    let kinds = match kind {
        Some(kind) => vec![kind],
        None => settings.hierarchy.kinds.clone(),
    };
    let documented = model.documented();
    let forests = match HierarchyBuilder::new(&model, settings.ordering).build_forests(
        &documented,
        &kinds,
        settings.hierarchy.parallel,
    ) {
        Ok(forests) => forests,
        Err(e) => return report_error(format, &DocSetError::from(e)),
    };

    let renderer = renderer_for(format, Some(started.elapsed().as_millis() as u64));
    if forests.iter().all(|forest| forest.is_empty()) {
        let kinds: Vec<&str> = kinds.iter().map(SymbolKind::as_str).collect();
        return emit(
            renderer.render_not_found(
                &format!("No documented {} symbols", kinds.join(", ")),
                None,
            ),
            ExitCode::NotFound,
        );
    }

    emit(renderer.render_forests(&forests), ExitCode::Success)
}
