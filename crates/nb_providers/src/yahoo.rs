use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use nb_core::{Error, Result, TickerFallback};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const USER_AGENT: &str = "Mozilla/5.0 (compatible; nb/0.1)";

/// Fallback ticker lookup against Yahoo's free-text search endpoint.
/// Used when the primary symbol search finds no common stock.
pub struct YahooTickerClient {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    quotes: Vec<Quote>,
}

#[derive(Deserialize)]
struct Quote {
    symbol: Option<String>,
}

impl YahooTickerClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl TickerFallback for YahooTickerClient {
    async fn lookup(&self, name: &str) -> Result<Option<String>> {
        let response = self
            .client
            .get(format!("{}/v1/finance/search", self.base_url))
            .query(&[("q", name), ("quotesCount", "1"), ("newsCount", "0")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Ticker(format!(
                "fallback ticker lookup failed with status {}",
                response.status()
            )));
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.quotes.into_iter().find_map(|q| q.symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_lookup_returns_first_symbol() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/v1/finance/search")
                .query_param("q", "Acme Corp");
            then.status(200).json_body(json!({
                "quotes": [{"symbol": "ACME", "shortname": "Acme Corp"}]
            }));
        });

        let client = YahooTickerClient::new()
            .unwrap()
            .with_base_url(server.base_url());
        let ticker = client.lookup("Acme Corp").await.unwrap();
        assert_eq!(ticker.as_deref(), Some("ACME"));
    }

    #[tokio::test]
    async fn test_lookup_empty_quotes_is_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/finance/search");
            then.status(200).json_body(json!({"quotes": []}));
        });

        let client = YahooTickerClient::new()
            .unwrap()
            .with_base_url(server.base_url());
        let ticker = client.lookup("No Such Company").await.unwrap();
        assert!(ticker.is_none());
    }
}
