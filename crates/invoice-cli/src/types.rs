use std::path::PathBuf;

use invoice_model::MigrationOutcome;

/// Everything the summary needs to report about one invocation.
#[derive(Debug)]
pub struct RunSummary {
    pub input: PathBuf,
    pub table: String,
    /// SHA-256 of the dataset file.
    pub sha256: String,
    pub records: usize,
    pub result: RunResult,
}

#[derive(Debug)]
pub enum RunResult {
    /// The store was contacted.
    Migration(MigrationOutcome),
    /// `--dry-run`: sizes of the batches that would be written.
    Plan { batch_sizes: Vec<usize> },
}

impl RunSummary {
    /// Process exit code: only a failed migration is non-zero.
    pub fn exit_code(&self) -> i32 {
        match &self.result {
            RunResult::Migration(outcome) if !outcome.success => 1,
            _ => 0,
        }
    }
}
