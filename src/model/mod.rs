//! Immutable symbol model snapshot.
//!
//! The model owns every [`Symbol`] of one generation run, documented or not.
//! Undocumented symbols stay in the model so that inheritance chains can be
//! walked through them; the index and hierarchy builders only ever borrow.
//!
//! # File format
//!
//! ```json
//! { "symbols": [
//!     { "id": 1, "name": "Root", "kind": "class" },
//!     { "id": 2, "name": "Mid", "kind": "class", "superclass": 1, "documented": false },
//!     { "id": 3, "name": "Leaf", "kind": "class", "superclass": 2 }
//! ] }
//! ```

mod error;

pub use error::{ModelError, ModelResult};

use crate::symbol::Symbol;
use crate::types::SymbolId;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct ModelFile {
    #[serde(default)]
    symbols: Vec<Symbol>,
}

#[derive(Debug, Default)]
pub struct SymbolModel {
    symbols: Vec<Symbol>,
    positions: HashMap<SymbolId, usize>,
}

impl SymbolModel {
    /// Build a snapshot, keeping the given order as model order.
    pub fn new(symbols: Vec<Symbol>) -> ModelResult<Self> {
        let mut positions = HashMap::with_capacity(symbols.len());
        for (position, symbol) in symbols.iter().enumerate() {
            if let Some(&existing) = positions.get(&symbol.id) {
                let first: &Symbol = &symbols[existing];
                return Err(ModelError::DuplicateId {
                    id: symbol.id,
                    first: first.qualified_name(),
                    second: symbol.qualified_name(),
                });
            }
            positions.insert(symbol.id, position);
        }

        let model = Self { symbols, positions };
        let dangling = model.dangling_references();
        if !dangling.is_empty() {
            tracing::debug!(
                "[model] {} supertype references point outside the model",
                dangling.len()
            );
        }
        Ok(model)
    }

    pub fn from_json_str(json: &str) -> ModelResult<Self> {
        let file: ModelFile = serde_json::from_str(json)?;
        Self::new(file.symbols)
    }

    /// Load a model from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ModelResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::from_json_str(&content)?;
        crate::log_event!(
            "model",
            "loaded",
            "{} symbols from {}",
            model.len(),
            path.display()
        );
        Ok(model)
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.positions.get(&id).map(|&position| &self.symbols[position])
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Documented symbols in model order.
    pub fn documented(&self) -> Vec<&Symbol> {
        self.symbols.iter().filter(|s| s.documented).collect()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Supertype references whose target is not part of the model.
    pub fn dangling_references(&self) -> Vec<(SymbolId, SymbolId)> {
        self.symbols
            .iter()
            .flat_map(|symbol| {
                symbol
                    .superclass
                    .iter()
                    .chain(symbol.superinterfaces.iter())
                    .filter(|target| !self.positions.contains_key(target))
                    .map(move |&target| (symbol.id, target))
            })
            .collect()
    }
}
