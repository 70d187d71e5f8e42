pub mod dataset;
pub mod error;
pub mod hash;

pub use dataset::{SourceDataset, load_invoices, parse_invoices};
pub use error::{IngestError, Result};
pub use hash::sha256_hex;
