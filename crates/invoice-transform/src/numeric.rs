//! Numeric coercion for amount fields.

use crate::error::{Result, TransformError};

/// Parses an amount field, treating empty or whitespace-only text as `0.0`.
///
/// Any other text must parse as a finite decimal number. Thousands
/// separators and currency symbols are rejected.
pub fn parse_amount(field: &'static str, value: &str) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(TransformError::InvalidNumber {
            field,
            value: value.to_string(),
        }),
    }
}
