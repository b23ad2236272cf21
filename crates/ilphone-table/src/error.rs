use ilphone_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("missing column {column:?} in {path}")]
    MissingColumn { path: PathBuf, column: String },
    #[error("invalid row {line} in {path}: {source}")]
    Row {
        path: PathBuf,
        line: usize,
        #[source]
        source: CoreError,
    },
}

pub type Result<T> = std::result::Result<T, TableError>;
