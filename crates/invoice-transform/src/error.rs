//! Errors raised while coercing source text into typed fields.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// A monetary or percentage field holds non-numeric text.
    #[error("{field} is not a number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    /// The invoice date could not be read as a calendar date.
    #[error("INVOICE DATE is not a recognizable date: '{value}'")]
    InvalidDate { value: String },
}

pub type Result<T> = std::result::Result<T, TransformError>;

/// A transform failure tied to the record that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invoice record {index} ({invoice_no}) is malformed: {source}")]
pub struct RecordError {
    /// Zero-based position in the dataset.
    pub index: usize,
    pub invoice_no: String,
    #[source]
    pub source: TransformError,
}
