//! Transformation of labelled invoice records into typed table rows.
//!
//! - **numeric**: amount parsing with the empty-means-zero rule
//! - **datetime**: invoice date normalization to a UTC instant
//! - **mapping**: the field-by-field SourceRecord to TargetRecord mapping

pub mod datetime;
pub mod error;
pub mod mapping;
pub mod numeric;

pub use datetime::parse_invoice_date;
pub use error::{RecordError, Result, TransformError};
pub use mapping::{to_target_record, transform_all};
pub use numeric::parse_amount;
