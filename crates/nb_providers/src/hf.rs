use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use nb_core::{Error, Result, SummaryModel};

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
const DEFAULT_MODEL: &str = "sshleifer/distilbart-cnn-12-6";
/// Model-backed calls are slower than plain API lookups.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Abstractive summarization via a hosted inference endpoint.
pub struct HfSummaryModel {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct SummaryRequest<'a> {
    inputs: &'a str,
    parameters: SummaryParameters,
}

#[derive(Serialize)]
struct SummaryParameters {
    min_length: u32,
    max_length: u32,
    do_sample: bool,
}

#[derive(Deserialize)]
struct SummaryItem {
    summary_text: String,
}

impl HfSummaryModel {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl SummaryModel for HfSummaryModel {
    async fn summarize(&self, text: &str, min_length: u32, max_length: u32) -> Result<String> {
        let request = SummaryRequest {
            inputs: text,
            parameters: SummaryParameters {
                min_length,
                max_length,
                // Deterministic decoding, same text in means same summary out.
                do_sample: false,
            },
        };

        let mut builder = self
            .client
            .post(format!("{}/models/{}", self.base_url, self.model))
            .json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {key}"));
        }

        let response = builder.send().await?;
        if !response.status().is_success() {
            return Err(Error::Summarization(format!(
                "summarization failed with status {}",
                response.status()
            )));
        }

        let items: Vec<SummaryItem> = response.json().await?;
        items
            .into_iter()
            .next()
            .map(|item| item.summary_text)
            .ok_or_else(|| Error::Summarization("empty summarization response".to_string()))
    }
}
