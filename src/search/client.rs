//! HTTP client for the city search endpoint

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

use super::types::{City, CityRecord, ReferencePoint};
use crate::config::SearchConfig;

const SEARCH_PATH: &str = "city/search";

/// Errors that can occur while searching
#[derive(Debug, Error)]
pub enum SearchError {
    /// The configured endpoint is not a usable base URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Transport failure (connection refused, timeout, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("Search service returned {code}: {message}")]
    Status { code: u16, message: String },

    /// The body was not a JSON array of city records
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SearchError::Parse(err.to_string())
        } else {
            SearchError::Network(err.to_string())
        }
    }
}

/// Client for `GET /city/search?q=<query>`
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: reqwest::Client,
    search_url: Url,
    max_results: usize,
    near: Option<ReferencePoint>,
}

impl SearchClient {
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            search_url: search_url(&config.endpoint)?,
            max_results: config.max_results,
            near: None,
        })
    }

    pub fn with_reference_point(mut self, near: Option<ReferencePoint>) -> Self {
        self.near = near;
        self
    }

    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    /// Build the request URL for a query
    pub fn request_url(&self, query: &str) -> Url {
        let mut url = self.search_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", query);
            if let Some(near) = self.near {
                pairs.append_pair("lng", &near.lng().to_string());
                pairs.append_pair("lat", &near.lat().to_string());
            }
        }
        url
    }

    /// Run one search. Results beyond `max_results` are dropped.
    pub async fn search(&self, query: &str) -> Result<Vec<City>, SearchError> {
        let url = self.request_url(query);
        log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                code: status.as_u16(),
                message: message.trim().to_string(),
            });
        }

        let records: Vec<CityRecord> = response.json().await?;
        Ok(records
            .into_iter()
            .take(self.max_results)
            .map(City::from)
            .collect())
    }
}

/// Resolve `{endpoint}/city/search`, tolerating a trailing slash or a path prefix.
fn search_url(endpoint: &str) -> Result<Url, SearchError> {
    let mut base = Url::parse(endpoint.trim())
        .map_err(|e| SearchError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;
    if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
        return Err(SearchError::InvalidEndpoint(format!(
            "{}: expected an http(s) URL",
            endpoint
        )));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(SEARCH_PATH)
        .map_err(|e| SearchError::InvalidEndpoint(format!("{}: {}", endpoint, e)))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
