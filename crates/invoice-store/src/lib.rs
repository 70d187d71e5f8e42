//! Store collaborator for the invoice migrator.
//!
//! The migrator only needs two operations from its backend: counting the rows
//! of a table and appending a batch of rows to it. [`InvoiceStore`] captures
//! that surface so the migrator can be driven by the hosted database
//! ([`RestStore`]) or by an in-process table ([`MemoryStore`]).

pub mod config;
pub mod error;
pub mod memory;
pub mod rest;

use invoice_model::TargetRecord;

pub use config::{DEFAULT_TIMEOUT_SECS, StoreConfig};
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use rest::RestStore;

/// Backend able to count and append invoice rows.
///
/// Each call blocks until the backend has answered. `insert_rows` is expected
/// to be atomic per call: either all rows of the batch are stored or none.
pub trait InvoiceStore {
    /// Returns the number of rows currently in `table`.
    fn count_rows(&self, table: &str) -> Result<u64>;

    /// Appends `rows` to `table` in one request.
    fn insert_rows(&self, table: &str, rows: &[TargetRecord]) -> Result<()>;
}

impl<S: InvoiceStore + ?Sized> InvoiceStore for &S {
    fn count_rows(&self, table: &str) -> Result<u64> {
        (**self).count_rows(table)
    }

    fn insert_rows(&self, table: &str, rows: &[TargetRecord]) -> Result<()> {
        (**self).insert_rows(table, rows)
    }
}
