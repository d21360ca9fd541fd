use std::path::PathBuf;

use thiserror::Error;

use checkout_core::DomainError;

pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read snapshot file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed snapshot document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid time of day {value:?} for {field}")]
    InvalidTime { field: String, value: String },

    #[error("rejected record: {0}")]
    Validation(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
