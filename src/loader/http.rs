//! HTTP client for fetching purchase data from a remote endpoint.

use crate::utils::config::DEFAULT_HTTP_TIMEOUT;
use crate::utils::error::LoadError;
use log::{debug, info};
use reqwest::blocking::Client;
use serde_json::Value;

/// Blocking client for JSON purchase feeds
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new client with the default timeout
    pub fn new() -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(LoadError::RequestFailed)?;

        Ok(Self { client })
    }

    /// GET `url` and decode the body as JSON
    pub fn fetch_json(&self, url: &str) -> Result<Value, LoadError> {
        info!("Fetching purchase data: {}", url);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(LoadError::RequestFailed)?;

        // Check HTTP status
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::InvalidResponse(format!(
                "HTTP {}: {}",
                status,
                response.text().unwrap_or_default()
            )));
        }

        let body = response.text().map_err(LoadError::RequestFailed)?;
        debug!("Received {} bytes", body.len());

        Ok(serde_json::from_str(&body)?)
    }
}
