//! Name index and inheritance tree generation for documentation sets.
//!
//! A [`SymbolModel`] of documented program elements goes in; alphabetical
//! index pages and per-kind inheritance forests come out. Both builders are
//! pure functions of the model and an [`OrderingPolicy`], so the same input
//! always produces the same output regardless of parallelism.

pub mod cli;
pub mod config;
pub mod docset;
pub mod hierarchy;
pub mod index;
pub mod io;
pub mod logging;
pub mod model;
pub mod ordering;
pub mod render;
pub mod symbol;
pub mod types;

pub use config::Settings;
pub use docset::{DocSet, DocSetError};
pub use hierarchy::{Forest, HierarchyBuilder, HierarchyError, HierarchyNode};
pub use index::{Bucket, IndexError, IndexMode, NameBucketer, Page, Paginator};
pub use model::{ModelError, SymbolModel};
pub use ordering::{OrderingPolicy, TieBreak};
pub use symbol::Symbol;
pub use types::{SymbolId, SymbolKind};
