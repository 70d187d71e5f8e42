//! Invoice date normalization.
//!
//! Dates are stored as UTC instants. Inputs without an offset (date-only or
//! naive date-time) are read as UTC, so `2023-01-15` becomes
//! `2023-01-15T00:00:00Z`. Inputs carrying an offset are converted to UTC.
//! Day/month order is only accepted where it is unambiguous.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::{Result, TransformError};

/// Parses an `INVOICE DATE` value into a UTC instant.
pub fn parse_invoice_date(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid(value));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Some(dt) = try_parse_datetime(trimmed) {
        return Ok(dt.and_utc());
    }

    if let Some(d) = try_parse_date(trimmed) {
        return Ok(d.and_time(NaiveTime::MIN).and_utc());
    }

    Err(invalid(value))
}

fn invalid(value: &str) -> TransformError {
    TransformError::InvalidDate {
        value: value.to_string(),
    }
}

/// Try to parse date-time formats without an offset.
fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
    ];

    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Try to parse date-only formats.
fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%d-%b-%Y",  // 15-Jan-2023
        "%d-%B-%Y",  // 15-January-2023
        "%d %b %Y",  // 15 Jan 2023
        "%d %B %Y",  // 15 January 2023
        "%b %d, %Y", // Jan 15, 2023
        "%B %d, %Y", // January 15, 2023
    ];

    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}
