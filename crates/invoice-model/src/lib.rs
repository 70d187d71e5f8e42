pub mod outcome;
pub mod source;
pub mod target;

pub use outcome::{MigrationOutcome, MigrationStatus};
pub use source::SourceRecord;
pub use target::TargetRecord;
