//! SourceRecord to TargetRecord mapping.
//!
//! | Source label                     | Target field                    | Coercion        |
//! |----------------------------------|---------------------------------|-----------------|
//! | `CLIENT`                         | `client`                        | copy            |
//! | `INVOICE NO.`                    | `invoice_no`                    | copy            |
//! | `INVOICE DATE`                   | `invoice_date`                  | UTC instant     |
//! | `CLIENT TRN`                     | `client_trn`                    | copy            |
//! | `DESCRIPTION`                    | `description`                   | copy            |
//! | `INVOICE SUB-TOTAL`              | `invoice_subtotal`              | amount, 0 empty |
//! | `REBATE`                         | `rebate`                        | amount, 0 empty |
//! | `INVOICE SUB-TOTAL AFTER REBATE` | `invoice_subtotal_after_rebate` | amount, 0 empty |
//! | `VAT % AMOUNT`                   | `vat_amount`                    | amount, 0 empty |
//! | `TOTAL INVOICE AMOUNT`           | `total_invoice_amount`          | amount, 0 empty |
//! | `Sales Person`                   | `sales_person`                  | copy            |
//! | `_year`                          | `year`                          | copy            |

use invoice_model::{SourceRecord, TargetRecord};

use crate::datetime::parse_invoice_date;
use crate::error::{RecordError, Result};
use crate::numeric::parse_amount;

/// Maps one source record to its table row.
pub fn to_target_record(source: &SourceRecord) -> Result<TargetRecord> {
    Ok(TargetRecord {
        client: source.client.clone(),
        invoice_no: source.invoice_no.clone(),
        invoice_date: parse_invoice_date(&source.invoice_date)?,
        client_trn: source.client_trn.clone(),
        description: source.description.clone(),
        invoice_subtotal: parse_amount("INVOICE SUB-TOTAL", &source.invoice_subtotal)?,
        rebate: parse_amount("REBATE", &source.rebate)?,
        invoice_subtotal_after_rebate: parse_amount(
            "INVOICE SUB-TOTAL AFTER REBATE",
            &source.invoice_subtotal_after_rebate,
        )?,
        vat_amount: parse_amount("VAT % AMOUNT", &source.vat_amount)?,
        total_invoice_amount: parse_amount("TOTAL INVOICE AMOUNT", &source.total_invoice_amount)?,
        sales_person: source.sales_person.clone(),
        year: source.year.clone(),
    })
}

/// Maps every record in order, stopping at the first malformed one.
pub fn transform_all(
    records: &[SourceRecord],
) -> std::result::Result<Vec<TargetRecord>, RecordError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            to_target_record(record).map_err(|source| RecordError {
                index,
                invoice_no: record.invoice_no.clone(),
                source,
            })
        })
        .collect()
}
