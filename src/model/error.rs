use crate::types::SymbolId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Duplicate symbol id {id} ('{first}' and '{second}')")]
    DuplicateId {
        id: SymbolId,
        first: String,
        second: String,
    },

    #[error("Cannot read symbol model {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed symbol model: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type ModelResult<T> = Result<T, ModelError>;
