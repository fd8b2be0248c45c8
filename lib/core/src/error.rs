use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures while building a [`Catalog`](crate::Catalog) from a tabular source.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("Data source not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("Row {row}: missing product id")]
    MissingId { row: usize },

    #[error("Duplicate product id: {0}")]
    DuplicateId(String),

    #[error("Stop-word list error: {0}")]
    StopWords(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
