use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use uuid::Uuid;

use nb_core::{Error, Result, SpeechService};

const DEFAULT_BASE_URL: &str = "https://translate.google.com";
/// Synthesis can be slow for longer summaries.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Text-to-speech through the gTTS endpoint. Audio artifacts are written
/// once under the configured directory and never cleaned up.
pub struct GttsClient {
    client: Client,
    base_url: String,
    audio_dir: PathBuf,
}

impl GttsClient {
    pub fn new(audio_dir: impl Into<PathBuf>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            audio_dir: audio_dir.into(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn audio_dir(&self) -> &Path {
        &self.audio_dir
    }
}

/// Collision-resistant artifact name for when the caller does not supply
/// one.
fn generated_name() -> String {
    format!("news_summary_{}.mp3", Uuid::new_v4())
}

#[async_trait]
impl SpeechService for GttsClient {
    async fn synthesize(&self, text: &str, lang: &str, filename: Option<&str>) -> Result<String> {
        if text.is_empty() {
            return Err(Error::Speech("nothing to synthesize".to_string()));
        }

        let response = self
            .client
            .get(format!("{}/translate_tts", self.base_url))
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", lang),
                ("q", text),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Speech(format!(
                "speech synthesis failed with status {}",
                response.status()
            )));
        }

        let bytes = response.bytes().await?;
        let name = filename.map(str::to_string).unwrap_or_else(generated_name);
        let path = self.audio_dir.join(name);

        tokio::fs::create_dir_all(&self.audio_dir).await?;
        tokio::fs::write(&path, &bytes).await?;
        debug!("wrote {} bytes to {}", bytes.len(), path.display());

        Ok(path.to_string_lossy().into_owned())
    }
}
