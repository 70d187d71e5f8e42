//! Normalized invoice rows as written to the `invoices` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A typed invoice row ready for insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRecord {
    pub client: String,
    pub invoice_no: String,
    #[serde(with = "iso_millis")]
    pub invoice_date: DateTime<Utc>,
    pub client_trn: String,
    pub description: String,
    pub invoice_subtotal: f64,
    pub rebate: f64,
    pub invoice_subtotal_after_rebate: f64,
    pub vat_amount: f64,
    pub total_invoice_amount: f64,
    pub sales_person: String,
    pub year: String,
}

/// RFC 3339 timestamps in UTC with millisecond precision (`2023-01-15T00:00:00.000Z`).
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}
