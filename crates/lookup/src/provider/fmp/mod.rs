//! FinancialModelingPrep symbol search provider.
//!
//! Symbol search via the /search-symbol endpoint of the stable API.
//! API documentation: https://site.financialmodelingprep.com/developer/docs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::errors::Result;
use crate::provider::SymbolSearchProvider;

const BASE_URL: &str = "https://financialmodelingprep.com/stable";
const PROVIDER_ID: &str = "FMP";

/// FinancialModelingPrep search client.
///
/// Performs a single GET per search with no retry; transport faults
/// propagate as [`crate::errors::Error::Network`].
pub struct FmpProvider {
    client: Client,
    base_url: String,
}

impl FmpProvider {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the provider at a different host. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for FmpProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SymbolSearchProvider for FmpProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn search_symbol(&self, query: &str, api_key: &str) -> Result<Value> {
        let url = format!("{}/search-symbol", self.base_url);
        debug!(provider = PROVIDER_ID, query, "searching symbol");

        let body = self
            .client
            .get(&url)
            .query(&[("query", query), ("apikey", api_key)])
            .send()
            .await?
            .json()
            .await?;

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id() {
        assert_eq!(FmpProvider::new().id(), "FMP");
    }

    #[test]
    fn test_base_url_override() {
        let provider = FmpProvider::new().with_base_url("http://127.0.0.1:9");
        assert_eq!(provider.base_url, "http://127.0.0.1:9");
    }
}
