//! CLI library components for the invoice migrator.

pub mod logging;
pub mod summary;
pub mod types;
