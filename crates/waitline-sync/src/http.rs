//! HTTP client for pushing signup records to the spreadsheet web app.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use waitline_core::SignupRecord;

/// Sentinel left in place until a real endpoint URL is configured.
///
/// A configured endpoint equal to this value (or empty) disables remote
/// delivery entirely; every submission then goes to the local waitlist.
pub const ENDPOINT_PLACEHOLDER: &str = "YOUR_SHEET_ENDPOINT_HERE";

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("endpoint returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("unrecognized ack body: {0}")]
    Json(#[from] serde_json::Error),
}

/// Acknowledgement body returned by the spreadsheet web app.
///
/// A parseable ack on a 2xx response is the whole success criterion; the
/// field values are not otherwise consumed.
#[derive(Debug, Deserialize)]
pub struct SheetAck {
    pub result: String,
    #[serde(default)]
    pub row: Option<u64>,
}

/// HTTP client for the signup endpoint.
pub struct SheetClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl SheetClient {
    /// Create a client for the given endpoint URL, stored verbatim.
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            timeout: None,
        }
    }

    /// Build a client from a configured endpoint value, or `None` when
    /// delivery is configured out (empty value or [`ENDPOINT_PLACEHOLDER`]).
    pub fn configured(endpoint: &str) -> Option<Self> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() || endpoint == ENDPOINT_PLACEHOLDER {
            return None;
        }
        Some(Self::new(endpoint.to_string()))
    }

    /// Apply a per-request timeout.
    ///
    /// Off by default: an unresponsive endpoint may hold a submission open
    /// indefinitely, exactly like the form it replaces.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Push one signup record to the endpoint.
    ///
    /// Sends `email`, `timestamp`, and `source` as form fields in a single
    /// POST. Success is any 2xx response whose body parses as a
    /// [`SheetAck`]; no retries are attempted here.
    pub async fn submit(&self, record: &SignupRecord) -> Result<SheetAck, SyncError> {
        info!(endpoint = %self.endpoint, email = %record.email, "posting signup to sheet endpoint");
        let mut request = self.client.post(&self.endpoint).form(&form_fields(record));
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SyncError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        let ack: SheetAck = serde_json::from_str(&body)?;
        info!(result = %ack.result, row = ?ack.row, "sheet endpoint acknowledged signup");
        Ok(ack)
    }
}

fn form_fields(record: &SignupRecord) -> [(&'static str, &str); 3] {
    [
        ("email", record.email.as_str()),
        ("timestamp", record.timestamp.as_str()),
        ("source", record.source.as_str()),
    ]
}
