//! Invoice entries as they appear in the static JSON dataset.

use serde::{Deserialize, Deserializer, Serialize};

/// One invoice entry from the input dataset.
///
/// Every field is text and keyed by the human-readable column label used in
/// the exported spreadsheet. Only the client, invoice number and invoice date
/// are required; all other labels may be absent or `null`, in which case they
/// read as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    #[serde(rename = "CLIENT")]
    pub client: String,
    #[serde(rename = "INVOICE NO.")]
    pub invoice_no: String,
    #[serde(rename = "INVOICE DATE")]
    pub invoice_date: String,
    #[serde(rename = "CLIENT TRN", default, deserialize_with = "null_as_empty")]
    pub client_trn: String,
    #[serde(rename = "DESCRIPTION", default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(rename = "INVOICE SUB-TOTAL", default, deserialize_with = "null_as_empty")]
    pub invoice_subtotal: String,
    #[serde(rename = "REBATE", default, deserialize_with = "null_as_empty")]
    pub rebate: String,
    #[serde(
        rename = "INVOICE SUB-TOTAL AFTER REBATE",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub invoice_subtotal_after_rebate: String,
    #[serde(rename = "VAT % AMOUNT", default, deserialize_with = "null_as_empty")]
    pub vat_amount: String,
    #[serde(rename = "TOTAL INVOICE AMOUNT", default, deserialize_with = "null_as_empty")]
    pub total_invoice_amount: String,
    #[serde(rename = "Sales Person", default, deserialize_with = "null_as_empty")]
    pub sales_person: String,
    /// Reporting year tag added when the yearly sheets were merged.
    #[serde(rename = "_year", default, deserialize_with = "null_as_empty")]
    pub year: String,
}

impl SourceRecord {
    /// Creates a record with the three required labels set.
    pub fn new(
        client: impl Into<String>,
        invoice_no: impl Into<String>,
        invoice_date: impl Into<String>,
    ) -> Self {
        Self {
            client: client.into(),
            invoice_no: invoice_no.into(),
            invoice_date: invoice_date.into(),
            ..Self::default()
        }
    }
}

/// Empty spreadsheet cells are exported as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
