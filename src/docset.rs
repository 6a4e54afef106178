//! One generation run: the name index plus every configured forest.

use crate::config::Settings;
use crate::hierarchy::{Forest, HierarchyBuilder, HierarchyError, HierarchyResult};
use crate::index::{IndexError, IndexResult, NameBucketer, Page, Paginator};
use crate::model::{ModelError, SymbolModel};
use crate::symbol::Symbol;
use crate::types::SymbolKind;
use serde::Serialize;
use std::time::Instant;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocSetError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),
}

/// Everything a renderer needs from one model snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct DocSet<'m> {
    /// `None` when the index is disabled or there is nothing to index
    pub index: Option<Vec<Page<'m>>>,

    /// Documented symbols of the unnamed scope, listed outside the index
    pub unnamed: Vec<&'m Symbol>,

    pub forests: Vec<Forest<'m>>,
}

type IndexOutput<'m> = (Option<Vec<Page<'m>>>, Vec<&'m Symbol>);

impl<'m> DocSet<'m> {
    /// Build the index and forests for `model`.
    ///
    /// With `hierarchy.parallel` set, index and forests are computed
    /// concurrently; the output is the same either way.
    pub fn build(model: &'m SymbolModel, settings: &Settings) -> Result<Self, DocSetError> {
        let started = Instant::now();
        let documented = model.documented();

        let index_job = || build_index(&documented, settings);
        let forest_job = || build_forests(model, &documented, settings);

        let (index, forests) = if settings.hierarchy.parallel {
            rayon::join(index_job, forest_job)
        } else {
            (index_job(), forest_job())
        };
        let (index, unnamed) = index?;
        let forests = forests?;

        crate::log_event!(
            "docset",
            "built",
            "{} index pages, {} forests in {:?}",
            index.as_ref().map_or(0, Vec::len),
            forests.len(),
            started.elapsed()
        );

        Ok(Self {
            index,
            unnamed,
            forests,
        })
    }

    pub fn forest(&self, kind: SymbolKind) -> Option<&Forest<'m>> {
        self.forests.iter().find(|forest| forest.kind == kind)
    }
}

fn build_index<'m>(documented: &[&'m Symbol], settings: &Settings) -> IndexResult<IndexOutput<'m>> {
    if !settings.index.enabled {
        return Ok((None, Vec::new()));
    }

    let partition = NameBucketer::new(settings.ordering).partition(documented.iter().copied());
    if partition.buckets.is_empty() {
        tracing::info!("[docset] no indexable names, skipping index");
        return Ok((None, partition.unnamed));
    }

    let pages = Paginator::new(settings.index.mode).paginate(partition.buckets)?;
    Ok((Some(pages), partition.unnamed))
}

fn build_forests<'m>(
    model: &'m SymbolModel,
    documented: &[&'m Symbol],
    settings: &Settings,
) -> HierarchyResult<Vec<Forest<'m>>> {
    if !settings.hierarchy.enabled {
        return Ok(Vec::new());
    }

    HierarchyBuilder::new(model, settings.ordering).build_forests(
        documented,
        &settings.hierarchy.kinds,
        settings.hierarchy.parallel,
    )
}
