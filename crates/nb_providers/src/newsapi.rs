use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use nb_core::types::{NO_CONTENT, NO_TITLE, UNKNOWN_DATE, UNKNOWN_SOURCE};
use nb_core::{Error, NewsSource, RawArticle, Result};

const DEFAULT_BASE_URL: &str = "https://newsapi.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
/// One page of results, matching the upstream pageSize cap we request.
const PAGE_SIZE: u32 = 10;

/// News aggregation adapter for NewsAPI's `/v2/everything` endpoint.
/// Missing fields on individual items map to sentinel strings instead of
/// failing the whole fetch.
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<Item>,
}

#[derive(Deserialize)]
struct Item {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    source: Option<ItemSource>,
}

#[derive(Deserialize)]
struct ItemSource {
    name: Option<String>,
}

impl NewsApiClient {
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
impl NewsSource for NewsApiClient {
    async fn latest(&self, company: &str) -> Result<Vec<RawArticle>> {
        let page_size = PAGE_SIZE.to_string();
        let response = self
            .client
            .get(format!("{}/v2/everything", self.base_url))
            .query(&[
                ("q", company),
                ("language", "en"),
                ("pageSize", page_size.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::News(format!(
                "news fetch failed with status {}",
                response.status()
            )));
        }

        let body: EverythingResponse = response.json().await?;
        Ok(body.articles.into_iter().map(into_raw_article).collect())
    }
}

fn into_raw_article(item: Item) -> RawArticle {
    RawArticle {
        title: item.title.unwrap_or_else(|| NO_TITLE.to_string()),
        content: item.description.unwrap_or_else(|| NO_CONTENT.to_string()),
        source: item
            .source
            .and_then(|s| s.name)
            .unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
        url: item.url.unwrap_or_default(),
        published_at: item.published_at.unwrap_or_else(|| UNKNOWN_DATE.to_string()),
    }
}
