use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use nb_core::{Error, Result, TranslationService};

const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Translation via the public gtx endpoint. The response is a nested
/// array where element 0 holds the translated segments.
pub struct GoogleTranslateClient {
    client: Client,
    base_url: String,
}

impl GoogleTranslateClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
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
impl TranslationService for GoogleTranslateClient {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let response = self
            .client
            .get(format!("{}/translate_a/single", self.base_url))
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Translation(format!(
                "translation failed with status {}",
                response.status()
            )));
        }

        let body: Value = response.json().await?;
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| Error::Translation("unexpected translation response".to_string()))?;

        let translated: String = segments
            .iter()
            .filter_map(|seg| seg.get(0).and_then(Value::as_str))
            .collect();

        if translated.is_empty() {
            return Err(Error::Translation("empty translation response".to_string()));
        }
        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_translate_concatenates_segments() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/translate_a/single")
                .query_param("sl", "en")
                .query_param("tl", "hi")
                .query_param("q", "Good results. Strong growth.");
            then.status(200).json_body(json!([
                [
                    ["अच्छे परिणाम। ", "Good results. ", null],
                    ["मजबूत वृद्धि।", "Strong growth.", null]
                ],
                null,
                "en"
            ]));
        });

        let client = GoogleTranslateClient::new()
            .unwrap()
            .with_base_url(server.base_url());
        let translated = client
            .translate("Good results. Strong growth.", "en", "hi")
            .await
            .unwrap();

        mock.assert();
        assert_eq!(translated, "अच्छे परिणाम। मजबूत वृद्धि।");
    }

    #[tokio::test]
    async fn test_translate_bad_shape_is_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/translate_a/single");
            then.status(200).json_body(json!({"error": "unexpected"}));
        });

        let client = GoogleTranslateClient::new()
            .unwrap()
            .with_base_url(server.base_url());
        let err = client.translate("text", "en", "hi").await.unwrap_err();
        assert!(matches!(err, Error::Translation(_)));
    }

    #[tokio::test]
    async fn test_translate_error_status_propagates() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/translate_a/single");
            then.status(503);
        });

        let client = GoogleTranslateClient::new()
            .unwrap()
            .with_base_url(server.base_url());
        let err = client.translate("text", "en", "hi").await.unwrap_err();
        assert!(matches!(err, Error::Translation(_)));
    }
}
