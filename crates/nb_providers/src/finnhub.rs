use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use nb_core::{Error, Result, SymbolCandidate, SymbolSearch};

const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Primary symbol search, Finnhub's `/search` endpoint.
pub struct FinnhubClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    result: Vec<SymbolCandidate>,
}

impl FinnhubClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl SymbolSearch for FinnhubClient {
    async fn search(&self, query: &str) -> Result<Vec<SymbolCandidate>> {
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("q", query), ("token", &self.api_key)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Ticker(format!(
                "symbol search failed with status {}",
                response.status()
            )));
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.result)
    }
}
