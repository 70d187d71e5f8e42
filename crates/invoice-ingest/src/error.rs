//! Error types for invoice dataset ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the invoice dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Dataset file not found.
    #[error("dataset not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the dataset file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not a JSON array of invoice objects.
    #[error("failed to parse invoice dataset {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
