//! Idempotent bulk load of the invoice dataset.
//!
//! The [`Migrator`] counts the rows already in the target table, skips the
//! run when there are any, and otherwise writes the transformed dataset in
//! fixed-size batches, one store call at a time.

pub mod error;
pub mod migrator;
pub mod options;

pub use error::{MigrationError, Result};
pub use migrator::{MigrationPlan, MigrationReport, Migrator};
pub use options::{DEFAULT_BATCH_SIZE, DEFAULT_TABLE, MigrationOptions};
