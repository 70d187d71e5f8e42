//! Connection settings for the hosted store.

use std::fmt;
use std::time::Duration;

use crate::error::{Result, StoreError};

/// Default request timeout for store calls (in seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`RestStore`](crate::RestStore).
#[derive(Clone)]
pub struct StoreConfig {
    /// Project URL, e.g. `https://abcd.supabase.co`.
    pub base_url: String,
    /// API key sent as `apikey` and as the bearer token.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Checks that the URL and key are usable.
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(StoreError::Config("store URL is empty".to_string()));
        }
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(StoreError::Config(format!(
                "store URL must start with http:// or https://: {url}"
            )));
        }
        if self.api_key.trim().is_empty() {
            return Err(StoreError::Config("API key is empty".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(StoreError::Config("timeout must be positive".to_string()));
        }
        Ok(())
    }

    /// REST endpoint for `table`.
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url.trim().trim_end_matches('/'))
    }
}

// The API key never goes into logs.
impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}
