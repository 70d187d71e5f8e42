//! Error types for the migration run.

use invoice_store::StoreError;
use invoice_transform::RecordError;
use thiserror::Error;

/// Reasons a migration run stops.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// The existing-row count could not be read. Nothing was written.
    #[error("failed to count existing rows in '{table}': {source}")]
    Precheck {
        table: String,
        #[source]
        source: StoreError,
    },

    /// A batch was rejected. Earlier batches stay committed.
    #[error("batch {batch} of {batches} failed after {inserted} invoices were inserted: {source}")]
    BatchInsert {
        /// One-based number of the failing batch.
        batch: usize,
        batches: usize,
        /// Rows committed by the batches before this one.
        inserted: u64,
        #[source]
        source: StoreError,
    },

    /// A source record could not be coerced. Nothing was written.
    #[error(transparent)]
    MalformedInput(#[from] RecordError),

    /// The migration options are unusable.
    #[error("invalid migration options: {0}")]
    Config(String),
}

impl MigrationError {
    /// Rows committed before the run stopped.
    #[must_use]
    pub fn inserted(&self) -> u64 {
        match self {
            Self::BatchInsert { inserted, .. } => *inserted,
            _ => 0,
        }
    }

    /// Batches committed before the run stopped.
    #[must_use]
    pub fn batches_committed(&self) -> usize {
        match self {
            Self::BatchInsert { batch, .. } => batch.saturating_sub(1),
            _ => 0,
        }
    }
}

pub type Result<T> = std::result::Result<T, MigrationError>;
