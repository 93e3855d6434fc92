//! Error types for input loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading reconciliation inputs.
///
/// Every variant carries the offending path so a failed run identifies its
/// input without extra context. Any of these is fatal to the run: matching
/// never starts on partial inputs.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Delimited content could not be parsed.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The requested header row lies beyond the end of the file.
    #[error("header row {row} not found in {path}: file has {rows_available} rows")]
    HeaderRowOutOfRange {
        path: PathBuf,
        row: usize,
        rows_available: usize,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
