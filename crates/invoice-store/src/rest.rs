//! PostgREST client for the hosted invoices table.

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::{AUTHORIZATION, CONTENT_RANGE, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;

use invoice_model::TargetRecord;

use crate::InvoiceStore;
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};

/// User agent string for store requests.
const USER_AGENT_VALUE: &str = concat!("invoice-migrate/", env!("CARGO_PKG_VERSION"));

/// Blocking client for a PostgREST endpoint (as exposed by Supabase).
#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    config: StoreConfig,
}

/// Error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    details: Option<String>,
}

impl RestStore {
    /// Creates a client for the project described by `config`.
    pub fn new(config: StoreConfig) -> Result<Self> {
        config.validate()?;

        let key = config.api_key.trim();
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(key)
                .map_err(|e| StoreError::Config(format!("invalid API key: {e}")))?,
        );
        let mut bearer = HeaderValue::from_str(&format!("Bearer {key}"))
            .map_err(|e| StoreError::Config(format!("invalid API key: {e}")))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Handles a non-success response by turning it into [`StoreError::Api`].
    fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = match response.text() {
            Ok(body) => body,
            Err(error) => {
                tracing::debug!(%status, %error, "failed to read error response body");
                String::new()
            }
        };
        Err(StoreError::Api {
            status: status.as_u16(),
            message: error_message(status, &body),
        })
    }
}

impl InvoiceStore for RestStore {
    fn count_rows(&self, table: &str) -> Result<u64> {
        let url = format!("{}?select=*", self.config.table_url(table));
        tracing::debug!(%url, "counting rows");

        let response = self
            .client
            .head(&url)
            .header("Prefer", "count=exact")
            .send()?;
        let response = Self::check_status(response)?;

        let range = response
            .headers()
            .get(CONTENT_RANGE)
            .ok_or_else(|| StoreError::InvalidResponse("missing Content-Range header".to_string()))?
            .to_str()
            .map_err(|e| StoreError::InvalidResponse(format!("unreadable Content-Range: {e}")))?;

        parse_content_range_total(range)
    }

    fn insert_rows(&self, table: &str, rows: &[TargetRecord]) -> Result<()> {
        let url = self.config.table_url(table);
        tracing::debug!(%url, rows = rows.len(), "inserting rows");

        let response = self
            .client
            .post(&url)
            .header("Prefer", "return=minimal")
            .json(rows)
            .send()?;
        Self::check_status(response)?;
        Ok(())
    }
}

/// Extracts the total from a `Content-Range` value such as `0-24/3573` or `*/0`.
fn parse_content_range_total(value: &str) -> Result<u64> {
    let total = value
        .rsplit_once('/')
        .map(|(_, total)| total.trim())
        .ok_or_else(|| StoreError::InvalidResponse(format!("malformed Content-Range: {value}")))?;
    total
        .parse::<u64>()
        .map_err(|_| StoreError::InvalidResponse(format!("row count not reported: {value}")))
}

/// Picks the most useful message out of an error response body.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        match (parsed.message, parsed.details) {
            (Some(message), Some(details)) if !details.is_empty() => {
                return format!("{message} ({details})");
            }
            (Some(message), _) => return message,
            _ => {}
        }
    }
    if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body.trim().to_string()
    }
}
