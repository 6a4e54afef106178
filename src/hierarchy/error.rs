use crate::types::{SymbolId, SymbolKind};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("Inheritance cycle detected at '{name}' (symbol {id})")]
    CyclicHierarchy { id: SymbolId, name: String },

    #[error("No hierarchy exists for {kind} symbols; expected class, interface, enum or annotation-type")]
    InvalidKindFilter { kind: SymbolKind },
}

pub type HierarchyResult<T> = Result<T, HierarchyError>;
