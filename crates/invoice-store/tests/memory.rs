//! Tests for the in-memory store.

use chrono::{TimeZone, Utc};
use invoice_model::TargetRecord;
use invoice_store::{InvoiceStore, MemoryStore};

fn row(invoice_no: &str) -> TargetRecord {
    TargetRecord {
        client: "Acme".to_string(),
        invoice_no: invoice_no.to_string(),
        invoice_date: Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap(),
        client_trn: String::new(),
        description: String::new(),
        invoice_subtotal: 100.0,
        rebate: 0.0,
        invoice_subtotal_after_rebate: 100.0,
        vat_amount: 5.0,
        total_invoice_amount: 105.0,
        sales_person: String::new(),
        year: "2023".to_string(),
    }
}

#[test]
fn empty_table_counts_zero() {
    let store = MemoryStore::new();
    assert_eq!(store.count_rows("invoices").unwrap(), 0);
}

#[test]
fn inserts_append_in_order() {
    let store = MemoryStore::new();
    store.insert_rows("invoices", &[row("1"), row("2")]).unwrap();
    store.insert_rows("invoices", &[row("3")]).unwrap();

    let numbers: Vec<String> = store
        .rows("invoices")
        .into_iter()
        .map(|r| r.invoice_no)
        .collect();

    assert_eq!(store.count_rows("invoices").unwrap(), 3);
    assert_eq!(numbers, vec!["1", "2", "3"]);
}

#[test]
fn tables_are_separate() {
    let store = MemoryStore::with_rows("invoices", vec![row("1")]);
    store.insert_rows("archive", &[row("9")]).unwrap();

    assert_eq!(store.count_rows("invoices").unwrap(), 1);
    assert_eq!(store.count_rows("archive").unwrap(), 1);
    assert_eq!(store.count_rows("other").unwrap(), 0);
}

#[test]
fn borrowed_store_is_a_store() {
    fn count(store: impl InvoiceStore) -> u64 {
        store.count_rows("invoices").unwrap()
    }

    let store = MemoryStore::with_rows("invoices", vec![row("1"), row("2")]);
    assert_eq!(count(&store), 2);
}
