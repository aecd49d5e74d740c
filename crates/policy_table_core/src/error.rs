//! Error types for dataset loading.
//!
//! Filtering and label formatting are total and have no error type.

use std::path::PathBuf;
use thiserror::Error;

/// Dataset operation result type.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Dataset loading errors.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The dataset file could not be read
    #[error("Failed to read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not a JSON array of records
    #[error("Failed to parse dataset from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}
