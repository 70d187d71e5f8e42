//! Tests for the migration run against scripted stores.

use std::cell::{Cell, RefCell};

use invoice_core::{MigrationError, MigrationOptions, MigrationReport, Migrator};
use invoice_model::{MigrationStatus, SourceRecord, TargetRecord};
use invoice_store::{InvoiceStore, MemoryStore, StoreError};
use proptest::prelude::*;

/// Store double that records every call and fails where told to.
#[derive(Default)]
struct ScriptedStore {
    existing: u64,
    fail_count: bool,
    /// One-based insert call that should be rejected.
    fail_on_insert: Option<usize>,
    count_calls: Cell<usize>,
    inserts: RefCell<Vec<Vec<String>>>,
}

impl ScriptedStore {
    fn batch_sizes(&self) -> Vec<usize> {
        self.inserts.borrow().iter().map(Vec::len).collect()
    }
}

impl InvoiceStore for ScriptedStore {
    fn count_rows(&self, _table: &str) -> invoice_store::Result<u64> {
        self.count_calls.set(self.count_calls.get() + 1);
        if self.fail_count {
            return Err(StoreError::Network("connection refused".to_string()));
        }
        Ok(self.existing)
    }

    fn insert_rows(&self, _table: &str, rows: &[TargetRecord]) -> invoice_store::Result<()> {
        let call = self.inserts.borrow().len() + 1;
        if self.fail_on_insert == Some(call) {
            return Err(StoreError::Api {
                status: 500,
                message: "statement timeout".to_string(),
            });
        }
        self.inserts
            .borrow_mut()
            .push(rows.iter().map(|r| r.invoice_no.clone()).collect());
        Ok(())
    }
}

fn records(count: usize) -> Vec<SourceRecord> {
    (0..count)
        .map(|i| {
            let mut record = SourceRecord::new("Acme", format!("INV-{i:04}"), "2023-01-15");
            record.invoice_subtotal = "100".to_string();
            record.vat_amount = "5".to_string();
            record.total_invoice_amount = "105".to_string();
            record
        })
        .collect()
}

#[test]
fn writes_250_records_in_three_ordered_batches() {
    let store = ScriptedStore::default();
    let migrator = Migrator::new(&store);

    let outcome = migrator.migrate(&records(250));

    assert!(outcome.success);
    assert_eq!(outcome.status, MigrationStatus::Migrated);
    assert_eq!(outcome.count, 250);
    assert_eq!(outcome.batches, 3);
    assert_eq!(outcome.message, "Successfully migrated 250 invoices");
    assert_eq!(store.batch_sizes(), vec![100, 100, 50]);

    let inserts = store.inserts.borrow();
    assert_eq!(inserts[0][0], "INV-0000");
    assert_eq!(inserts[1][0], "INV-0100");
    assert_eq!(inserts[2][49], "INV-0249");
}

#[test]
fn second_batch_failure_stops_the_run() {
    let store = ScriptedStore {
        fail_on_insert: Some(2),
        ..ScriptedStore::default()
    };
    let migrator = Migrator::new(&store);

    let outcome = migrator.migrate(&records(250));

    assert!(!outcome.success);
    assert_eq!(outcome.status, MigrationStatus::Failed);
    assert_eq!(outcome.count, 100);
    assert_eq!(outcome.batches, 1);
    assert!(outcome.message.contains("statement timeout"));
    assert_eq!(outcome.error.as_deref(), Some(outcome.message.as_str()));
    // Only the first batch landed; the third was never attempted.
    assert_eq!(store.batch_sizes(), vec![100]);
}

#[test]
fn batch_failure_error_carries_progress() {
    let store = ScriptedStore {
        fail_on_insert: Some(2),
        ..ScriptedStore::default()
    };

    let err = Migrator::new(&store).run(&records(250)).unwrap_err();

    match err {
        MigrationError::BatchInsert {
            batch,
            batches,
            inserted,
            ..
        } => {
            assert_eq!(batch, 2);
            assert_eq!(batches, 3);
            assert_eq!(inserted, 100);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn populated_table_is_skipped() {
    let store = ScriptedStore {
        existing: 42,
        ..ScriptedStore::default()
    };

    let outcome = Migrator::new(&store).migrate(&records(10));

    assert!(outcome.success);
    assert!(outcome.is_skipped());
    assert_eq!(outcome.count, 42);
    assert_eq!(outcome.message, "Data already migrated");
    assert!(store.inserts.borrow().is_empty());
}

#[test]
fn count_failure_is_reported_without_writes() {
    let store = ScriptedStore {
        fail_count: true,
        ..ScriptedStore::default()
    };

    let err = Migrator::new(&store).run(&records(10)).unwrap_err();

    assert!(matches!(err, MigrationError::Precheck { .. }));
    assert!(err.to_string().contains("connection refused"));
    assert!(store.inserts.borrow().is_empty());
}

#[test]
fn empty_dataset_inserts_nothing() {
    let store = ScriptedStore::default();

    let outcome = Migrator::new(&store).migrate(&[]);

    assert!(outcome.success);
    assert_eq!(outcome.status, MigrationStatus::Migrated);
    assert_eq!(outcome.count, 0);
    assert_eq!(store.count_calls.get(), 1);
    assert!(store.inserts.borrow().is_empty());
}

#[test]
fn malformed_record_prevents_any_write() {
    let mut input = records(150);
    input[120].rebate = "n/a".to_string();
    let store = ScriptedStore::default();

    let outcome = Migrator::new(&store).migrate(&input);

    assert!(!outcome.success);
    assert_eq!(outcome.count, 0);
    assert!(outcome.message.contains("INV-0120"));
    assert!(outcome.message.contains("REBATE"));
    assert!(store.inserts.borrow().is_empty());
}

#[test]
fn second_run_is_skipped() {
    let store = MemoryStore::new();
    let migrator = Migrator::new(&store);
    let input = records(130);

    let first = migrator.migrate(&input);
    let second = migrator.migrate(&input);

    assert_eq!(first.status, MigrationStatus::Migrated);
    assert_eq!(first.count, 130);
    assert_eq!(second.status, MigrationStatus::Skipped);
    assert_eq!(second.count, 130);
    assert_eq!(migrator.store().rows("invoices").len(), 130);
}

#[test]
fn custom_table_and_batch_size() {
    let store = MemoryStore::new();
    let migrator = Migrator::new(&store).with_options(
        MigrationOptions::default()
            .with_table("invoices_staging")
            .with_batch_size(40),
    );

    assert_eq!(migrator.options().table, "invoices_staging");
    let report = migrator.run(&records(90)).expect("migrate");

    assert_eq!(
        report,
        MigrationReport::Migrated {
            inserted: 90,
            batches: 3
        }
    );
    assert_eq!(store.rows("invoices_staging").len(), 90);
    assert!(store.rows("invoices").is_empty());
}

#[test]
fn zero_batch_size_fails_before_the_store_is_touched() {
    let store = ScriptedStore::default();
    let migrator =
        Migrator::new(&store).with_options(MigrationOptions::default().with_batch_size(0));

    let outcome = migrator.migrate(&records(5));

    assert!(!outcome.success);
    assert_eq!(store.count_calls.get(), 0);
}

#[test]
fn plan_does_not_touch_the_store() {
    let store = ScriptedStore::default();

    let plan = Migrator::new(&store).plan(&records(250)).expect("plan");

    assert_eq!(plan.records.len(), 250);
    assert_eq!(plan.batch_sizes, vec![100, 100, 50]);
    assert_eq!(store.count_calls.get(), 0);
}

proptest! {
    #[test]
    fn batches_cover_input_in_order(count in 0usize..400, batch_size in 1usize..150) {
        let store = ScriptedStore::default();
        let migrator = Migrator::new(&store)
            .with_options(MigrationOptions::default().with_batch_size(batch_size));
        let input = records(count);

        let outcome = migrator.migrate(&input);
        let sizes = store.batch_sizes();

        prop_assert!(outcome.success);
        prop_assert_eq!(outcome.count, count as u64);
        prop_assert_eq!(sizes.len(), count.div_ceil(batch_size));
        prop_assert!(sizes.iter().all(|&size| size >= 1 && size <= batch_size));
        if let Some((last, full)) = sizes.split_last() {
            prop_assert!(full.iter().all(|&size| size == batch_size));
            prop_assert!(*last <= batch_size);
        }
        let written: Vec<String> = store.inserts.borrow().iter().flatten().cloned().collect();
        let expected: Vec<String> = input.iter().map(|r| r.invoice_no.clone()).collect();
        prop_assert_eq!(written, expected);
    }
}
