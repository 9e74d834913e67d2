use std::env;
use std::path::PathBuf;

use nb_core::{Error, Result};

/// Default directory for synthesized audio artifacts.
pub const DEFAULT_AUDIO_DIR: &str = "static";

/// API keys and paths for the external collaborators, read from the
/// environment so no credentials live in code or config files.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub finnhub_api_key: String,
    pub news_api_key: String,
    /// Optional: the summarization service also answers unauthenticated
    /// requests, just with tighter rate limits.
    pub hf_api_key: Option<String>,
    pub audio_dir: PathBuf,
}

impl ProviderConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            finnhub_api_key: require("FINNHUB_API_KEY")?,
            news_api_key: require("NEWS_API_KEY")?,
            hf_api_key: env::var("HF_API_KEY").ok(),
            audio_dir: env::var("NB_AUDIO_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_AUDIO_DIR)),
        })
    }
}

fn require(key: &str) -> Result<String> {
    env::var(key).map_err(|_| Error::Config(format!("{key} is not set")))
}
