//! Tests for loading the invoice dataset from disk.

use std::fs;

use invoice_ingest::{IngestError, load_invoices, parse_invoices, sha256_hex};

const TWO_INVOICES: &str = r#"[
  {
    "CLIENT": "Acme Trading LLC",
    "INVOICE NO.": "INV-0001",
    "INVOICE DATE": "2023-01-15",
    "CLIENT TRN": "100234567800003",
    "DESCRIPTION": "Consulting services",
    "INVOICE SUB-TOTAL": "1000",
    "REBATE": "",
    "INVOICE SUB-TOTAL AFTER REBATE": "1000",
    "VAT % AMOUNT": "50",
    "TOTAL INVOICE AMOUNT": "1050",
    "Sales Person": "Sara",
    "_year": "2023"
  },
  {
    "CLIENT": "Blue Harbor",
    "INVOICE NO.": "INV-0002",
    "INVOICE DATE": "2023-02-01",
    "DESCRIPTION": "Annual support",
    "INVOICE SUB-TOTAL": "250.75",
    "_year": "2023"
  }
]"#;

#[test]
fn loads_records_in_file_order() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("invoices.json");
    fs::write(&path, TWO_INVOICES).expect("write dataset");

    let dataset = load_invoices(&path).expect("load dataset");

    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.records[0].invoice_no, "INV-0001");
    assert_eq!(dataset.records[1].invoice_no, "INV-0002");
    assert_eq!(dataset.records[1].client_trn, "");
    assert_eq!(dataset.sha256, sha256_hex(TWO_INVOICES.as_bytes()));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("absent.json");

    let err = load_invoices(&path).unwrap_err();

    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn malformed_json_names_the_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{\"CLIENT\": ").expect("write dataset");

    let err = load_invoices(&path).unwrap_err();

    assert!(matches!(err, IngestError::Json { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn bundled_sample_dataset_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../data/invoices.sample.json");

    let dataset = load_invoices(&path).expect("load sample dataset");

    assert_eq!(dataset.len(), 3);
    assert!(dataset.records.iter().all(|r| !r.invoice_no.is_empty()));
    assert_eq!(dataset.records[2].year, "2024");
}

#[test]
fn null_cells_do_not_reject_the_dataset() {
    let json = r#"[{"CLIENT":"Acme","INVOICE NO.":"INV-1","INVOICE DATE":"2023-01-15","CLIENT TRN":null,"REBATE":null}]"#;

    let dataset = parse_invoices(json).expect("parse dataset");

    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records[0].client_trn, "");
    assert_eq!(dataset.records[0].rebate, "");
}
