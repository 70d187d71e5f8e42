//! Loading the static invoice dataset.
//!
//! The dataset is a single JSON array of [`SourceRecord`] objects. It is read
//! into memory in one piece before any processing starts and is not modified
//! afterwards.

use std::path::Path;

use invoice_model::SourceRecord;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::hash::sha256_hex;

/// The invoice dataset as loaded from disk or memory.
#[derive(Debug, Clone, Default)]
pub struct SourceDataset {
    /// Records in file order.
    pub records: Vec<SourceRecord>,
    /// SHA-256 of the raw dataset bytes, hex encoded.
    pub sha256: String,
}

impl SourceDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Reads and parses the dataset at `path`.
pub fn load_invoices(path: &Path) -> Result<SourceDataset> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_bytes(&bytes, &path.display().to_string())?;
    debug!(
        path = %path.display(),
        records = dataset.len(),
        sha256 = %dataset.sha256,
        "loaded invoice dataset"
    );
    Ok(dataset)
}

/// Parses a dataset held in memory, e.g. one embedded with `include_str!`.
pub fn parse_invoices(text: &str) -> Result<SourceDataset> {
    parse_bytes(text.as_bytes(), "<memory>")
}

fn parse_bytes(bytes: &[u8], origin: &str) -> Result<SourceDataset> {
    let records: Vec<SourceRecord> =
        serde_json::from_slice(bytes).map_err(|source| IngestError::Json {
            origin: origin.to_string(),
            source,
        })?;
    Ok(SourceDataset {
        records,
        sha256: sha256_hex(bytes),
    })
}
