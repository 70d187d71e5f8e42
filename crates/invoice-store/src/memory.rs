//! In-process table store.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use invoice_model::TargetRecord;

use crate::InvoiceStore;
use crate::error::{Result, StoreError};

/// Tables held in memory, keyed by name.
///
/// Inserts are all-or-nothing per call, like a transactional backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<BTreeMap<String, Vec<TargetRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose `table` already holds `rows`.
    pub fn with_rows(table: impl Into<String>, rows: Vec<TargetRecord>) -> Self {
        let store = Self::new();
        if let Ok(mut tables) = store.tables.lock() {
            tables.insert(table.into(), rows);
        }
        store
    }

    /// Snapshot of the rows in `table`.
    pub fn rows(&self, table: &str) -> Vec<TargetRecord> {
        self.lock()
            .map(|tables| tables.get(table).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, Vec<TargetRecord>>>> {
        self.tables
            .lock()
            .map_err(|_| StoreError::InvalidResponse("memory store lock poisoned".to_string()))
    }
}

impl InvoiceStore for MemoryStore {
    fn count_rows(&self, table: &str) -> Result<u64> {
        let tables = self.lock()?;
        Ok(tables.get(table).map_or(0, |rows| rows.len() as u64))
    }

    fn insert_rows(&self, table: &str, rows: &[TargetRecord]) -> Result<()> {
        let mut tables = self.lock()?;
        tables
            .entry(table.to_string())
            .or_default()
            .extend_from_slice(rows);
        Ok(())
    }
}
