use async_trait::async_trait;

use crate::types::{RawArticle, SymbolCandidate};
use crate::Result;

/// Primary symbol lookup: free-text company name to exchange symbol
/// candidates.
#[async_trait]
pub trait SymbolSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SymbolCandidate>>;
}

/// Secondary ticker lookup used when the primary search yields nothing.
/// Returns `None` when the name cannot be resolved at all.
#[async_trait]
pub trait TickerFallback: Send + Sync {
    async fn lookup(&self, name: &str) -> Result<Option<String>>;
}

/// News aggregation service: recent English-language articles for a
/// company name, bounded to one page.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn latest(&self, company: &str) -> Result<Vec<RawArticle>>;
}

/// Abstractive summarization model. Length bounds are in model tokens;
/// decoding must be deterministic.
#[async_trait]
pub trait SummaryModel: Send + Sync {
    async fn summarize(&self, text: &str, min_length: u32, max_length: u32) -> Result<String>;
}

#[async_trait]
pub trait TranslationService: Send + Sync {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;
}

/// Text-to-speech synthesis. Writes the audio artifact and returns its
/// path; when `filename` is `None` a collision-resistant name is generated
/// under the service's artifacts directory.
#[async_trait]
pub trait SpeechService: Send + Sync {
    async fn synthesize(&self, text: &str, lang: &str, filename: Option<&str>) -> Result<String>;
}
