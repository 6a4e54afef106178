use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("Split index requested but there are no names to index")]
    EmptyIndex,
}

pub type IndexResult<T> = Result<T, IndexError>;
