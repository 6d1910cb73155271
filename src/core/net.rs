// src/core/net.rs
// Blocking HTTP GET of the schedule page.

use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;

use crate::config::consts::USER_AGENT;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {status} {url}")]
    Status { url: String, status: reqwest::StatusCode },

    #[error("network disabled (offline mode)")]
    Offline,
}

/// Where the raw schedule document comes from.
pub trait Source {
    /// Human-readable location, shown in change notices.
    fn location(&self) -> &str;

    fn fetch(&self) -> Result<String, FetchError>;
}

pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| FetchError::Request { url: s!(url), source })?;
        Ok(Self { url: s!(url), client })
    }
}

impl Source for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<String, FetchError> {
        let req_err = |source| FetchError::Request { url: self.url.clone(), source };

        let resp = self.client.get(&self.url).send().map_err(req_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: self.url.clone(), status });
        }
        let body = resp.text().map_err(req_err)?;
        logd!("Fetched {} ({} bytes)", self.url, body.len());
        Ok(body)
    }
}

/// Stand-in used by `--offline`: every fetch fails, so the run falls back to the snapshot.
pub struct OfflineSource {
    url: String,
}

impl OfflineSource {
    pub fn new(url: &str) -> Self {
        Self { url: s!(url) }
    }
}

impl Source for OfflineSource {
    fn location(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<String, FetchError> {
        Err(FetchError::Offline)
    }
}
