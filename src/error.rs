// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that aborts a run. Structural absences (no table, no rows)
/// are NOT here — those travel as empty containers and only become
/// `NothingExtracted` at the wrapper boundary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("file not found: {0}")]
    MissingFile(PathBuf),

    #[error("network error while fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {status} for {url}")]
    HttpStatus { url: String, status: reqwest::StatusCode },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("no table data extracted from {0}")]
    NothingExtracted(String),

    #[error("column not found in CSV: {0}")]
    MissingColumn(String),

    #[error("{0}")]
    Usage(String),
}

impl Error {
    pub fn usage(msg: impl Into<String>) -> Self {
        Error::Usage(msg.into())
    }
}
