//! HTTP suggestion source
//!
//! Issues `GET <endpoint>?query=<q>&limit=<n>` and expects a JSON array of
//! strings back.

use std::time::Duration;

use reqwest::{Client, Url};

use super::{SourceError, SuggestionSource};
use crate::error::SuggestError;

/// Public word-suggestion endpoint used when no other is configured
pub const DEFAULT_ENDPOINT: &str = "https://autocomplete-lyart.vercel.app/api/words";

/// Suggestion source backed by a remote HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: Url,
}

impl HttpSource {
    /// Create a new HTTP source
    ///
    /// Fails if `endpoint` is not an absolute URL or the client cannot be built.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, SuggestError> {
        let base_url = Url::parse(endpoint).map_err(|e| {
            SuggestError::InvalidConfig(format!("invalid endpoint '{}': {}", endpoint, e))
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SuggestError::InvalidConfig(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the request URL for a query, appending to any existing query string
    pub(crate) fn request_url(&self, query: &str, limit: usize) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("limit", &limit.to_string());
        url
    }
}

impl SuggestionSource for HttpSource {
    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<String>, SourceError> {
        let url = self.request_url(query, limit);

        let response = self.client.get(url).send().await.map_err(|e| {
            log::warn!("Error fetching suggestions: {}", e);
            SourceError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Suggestion request failed with status {}", status);
            return Err(SourceError::Status {
                code: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        serde_json::from_str::<Vec<String>>(&body).map_err(|e| SourceError::Decode(e.to_string()))
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
