//! The migration run: precheck, transform, batched write.

use tracing::{error, info, info_span, warn};

use invoice_model::{MigrationOutcome, SourceRecord, TargetRecord};
use invoice_store::InvoiceStore;
use invoice_transform::transform_all;

use crate::error::{MigrationError, Result};
use crate::options::MigrationOptions;

/// Moves the invoice dataset into a store, at most once.
///
/// The store is injected so the same run can target the hosted database or a
/// test double. The existing-row check is not atomic with the inserts: two
/// runs started at the same time can both see an empty table.
#[derive(Debug)]
pub struct Migrator<S> {
    store: S,
    options: MigrationOptions,
}

/// What a successful run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationReport {
    /// The table already held `existing` rows.
    Skipped { existing: u64 },
    /// `inserted` rows were written in `batches` calls.
    Migrated { inserted: u64, batches: usize },
}

/// The transformed dataset and the batches it would be written in.
#[derive(Debug, Clone)]
pub struct MigrationPlan {
    pub records: Vec<TargetRecord>,
    /// Row count of each insert call, in order.
    pub batch_sizes: Vec<usize>,
}

impl MigrationPlan {
    pub fn batch_count(&self) -> usize {
        self.batch_sizes.len()
    }
}

impl<S: InvoiceStore> Migrator<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            options: MigrationOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: MigrationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &MigrationOptions {
        &self.options
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs the migration and folds every error into the outcome.
    pub fn migrate(&self, records: &[SourceRecord]) -> MigrationOutcome {
        let span = info_span!("migrate", table = %self.options.table);
        let _guard = span.enter();

        match self.run(records) {
            Ok(MigrationReport::Skipped { existing }) => MigrationOutcome::skipped(existing),
            Ok(MigrationReport::Migrated { inserted, batches }) => {
                MigrationOutcome::migrated(inserted, batches)
            }
            Err(err) => {
                error!(error = %err, inserted = err.inserted(), "migration failed");
                MigrationOutcome::failed(
                    err.to_string(),
                    err.inserted(),
                    err.batches_committed(),
                )
            }
        }
    }

    /// Runs the migration, returning the first error unchanged.
    ///
    /// The row count is read before anything else. If the table is empty,
    /// every record is transformed before the first insert, so malformed
    /// input never leaves a partial load behind. Batches are written in
    /// order and the run stops at the first rejected batch without undoing
    /// the ones already committed.
    pub fn run(&self, records: &[SourceRecord]) -> Result<MigrationReport> {
        self.options.validate()?;
        let table = self.options.table.as_str();
        info!(records = records.len(), "starting invoice migration");

        let existing = self
            .store
            .count_rows(table)
            .map_err(|source| MigrationError::Precheck {
                table: table.to_string(),
                source,
            })?;
        if existing > 0 {
            warn!(existing, "table already has data, skipping migration");
            return Ok(MigrationReport::Skipped { existing });
        }

        let targets = transform_all(records)?;
        let total = targets.len();
        let batches = total.div_ceil(self.options.batch_size);
        info!(total, batches, "migrating {total} invoices");

        let mut inserted = 0u64;
        for (index, batch) in targets.chunks(self.options.batch_size).enumerate() {
            self.store
                .insert_rows(table, batch)
                .map_err(|source| MigrationError::BatchInsert {
                    batch: index + 1,
                    batches,
                    inserted,
                    source,
                })?;
            inserted += batch.len() as u64;
            info!(
                batch = index + 1,
                inserted,
                total,
                "migrated {inserted}/{total} invoices"
            );
        }

        info!(inserted, batches, "migration completed");
        Ok(MigrationReport::Migrated { inserted, batches })
    }

    /// Transforms the dataset and partitions it without touching the store.
    pub fn plan(&self, records: &[SourceRecord]) -> Result<MigrationPlan> {
        self.options.validate()?;
        let records = transform_all(records)?;
        let batch_sizes = records
            .chunks(self.options.batch_size)
            .map(<[TargetRecord]>::len)
            .collect();
        Ok(MigrationPlan {
            records,
            batch_sizes,
        })
    }
}
