//! Dataset loading errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Failures while loading the country dataset
///
/// All of these are fatal at startup; the service never runs with a
/// partially loaded dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read
    #[error("Failed to read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid JSON
    #[error("Invalid dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top-level value is not an array of records
    #[error("Dataset must be a JSON array of country records")]
    NotAnArray,

    /// A record does not match the country shape
    #[error("Invalid country record at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}
