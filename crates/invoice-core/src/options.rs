//! Options controlling where and how the dataset is written.

use crate::error::{MigrationError, Result};

/// Table the invoices are written to.
pub const DEFAULT_TABLE: &str = "invoices";

/// Rows per insert call.
pub const DEFAULT_BATCH_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationOptions {
    /// Target table name.
    pub table: String,
    /// Maximum rows per insert call.
    pub batch_size: usize,
}

impl Default for MigrationOptions {
    fn default() -> Self {
        Self {
            table: DEFAULT_TABLE.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl MigrationOptions {
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Rejects a zero batch size and table names that are not plain identifiers.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(MigrationError::Config(
                "batch size must be at least 1".to_string(),
            ));
        }
        let valid_table = !self.table.is_empty()
            && self
                .table
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_table {
            return Err(MigrationError::Config(format!(
                "table name must be a plain identifier: '{}'",
                self.table
            )));
        }
        Ok(())
    }
}
