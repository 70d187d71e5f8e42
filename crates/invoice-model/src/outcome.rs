//! The structured result handed back to whoever triggered a migration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a migration run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationStatus {
    /// All batches were written.
    Migrated,
    /// The table already held rows, nothing was written.
    Skipped,
    /// The run stopped on an error.
    Failed,
}

impl MigrationStatus {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Migrated => "Migrated",
            Self::Skipped => "Skipped",
            Self::Failed => "Failed",
        }
    }
}

impl fmt::Display for MigrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of a migration run.
///
/// `count` is the number of rows inserted by this run, or the existing row
/// count when the run was skipped. On failure it holds the rows committed
/// before the failing batch, which stay in the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationOutcome {
    pub success: bool,
    pub status: MigrationStatus,
    pub message: String,
    pub count: u64,
    /// Number of batches committed by this run.
    pub batches: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MigrationOutcome {
    /// The table was already populated.
    #[must_use]
    pub fn skipped(existing: u64) -> Self {
        Self {
            success: true,
            status: MigrationStatus::Skipped,
            message: "Data already migrated".to_string(),
            count: existing,
            batches: 0,
            error: None,
        }
    }

    /// Every batch was written.
    #[must_use]
    pub fn migrated(inserted: u64, batches: usize) -> Self {
        Self {
            success: true,
            status: MigrationStatus::Migrated,
            message: format!("Successfully migrated {inserted} invoices"),
            count: inserted,
            batches,
            error: None,
        }
    }

    /// The run stopped after committing `inserted` rows in `batches` batches.
    #[must_use]
    pub fn failed(message: impl Into<String>, inserted: u64, batches: usize) -> Self {
        let message = message.into();
        Self {
            success: false,
            status: MigrationStatus::Failed,
            error: Some(message.clone()),
            message,
            count: inserted,
            batches,
        }
    }

    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.status == MigrationStatus::Skipped
    }
}
