use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;
use tracing::{info, warn};

use nb_core::{
    Briefing, BriefingStore, CompanyBriefing, NewsSource, RawArticle, Result, SpeechService,
    SummaryModel, SymbolSearch, TickerFallback, TickerResolution, TranslationService,
};

use crate::summary::Summarizer;
use crate::ticker::TickerResolver;

const SOURCE_LANG: &str = "en";
const TARGET_LANG: &str = "hi";

/// Orchestrates one company briefing: ticker gate, news fetch, then an
/// independent map over articles (summary, sentiment, translation, speech).
/// A failing service degrades a single field of a single record, never the
/// batch.
pub struct BriefingProcessor {
    resolver: TickerResolver,
    news: Arc<dyn NewsSource>,
    summarizer: Summarizer,
    translator: Arc<dyn TranslationService>,
    speech: Arc<dyn SpeechService>,
    store: Arc<dyn BriefingStore>,
}

impl BriefingProcessor {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        primary: Arc<dyn SymbolSearch>,
        fallback: Arc<dyn TickerFallback>,
        news: Arc<dyn NewsSource>,
        model: Arc<dyn SummaryModel>,
        translator: Arc<dyn TranslationService>,
        speech: Arc<dyn SpeechService>,
        store: Arc<dyn BriefingStore>,
    ) -> Self {
        Self {
            resolver: TickerResolver::new(primary, fallback),
            news,
            summarizer: Summarizer::new(model),
            translator,
            speech,
            store,
        }
    }

    pub fn store(&self) -> Arc<dyn BriefingStore> {
        self.store.clone()
    }

    pub async fn process(&self, company: &str) -> Result<CompanyBriefing> {
        let ticker = match self.resolver.resolve(company).await {
            Ok(TickerResolution::Resolved(ticker)) => ticker,
            Ok(TickerResolution::NotFound) => {
                info!("no ticker found for {company}");
                return Ok(CompanyBriefing::not_found(company));
            }
            Err(e) => {
                warn!("ticker resolution failed for {company}: {e}");
                return Ok(CompanyBriefing::not_found(company));
            }
        };
        info!("resolved {company} to {ticker}");

        let articles = match self.news.latest(company).await {
            Ok(articles) => articles,
            Err(e) => {
                warn!("news fetch failed for {company}: {e}");
                Vec::new()
            }
        };
        info!("fetched {} articles for {company}", articles.len());

        // Articles are independent; fan out but keep input order.
        let records = join_all(
            articles
                .into_iter()
                .map(|article| self.process_article(article)),
        )
        .await;

        for record in &records {
            self.store.append(record.clone()).await?;
        }

        Ok(CompanyBriefing {
            company: company.to_string(),
            ticker: Some(ticker),
            company_found: true,
            records,
            generated_at: Utc::now(),
        })
    }

    async fn process_article(&self, article: RawArticle) -> Briefing {
        let summary = self.summarizer.summarize(&article.content).await;
        let sentiment = nb_sentiment::analyze(&article.content);

        let audio = match self
            .translator
            .translate(&summary, SOURCE_LANG, TARGET_LANG)
            .await
        {
            Ok(translated) => match self.speech.synthesize(&translated, TARGET_LANG, None).await {
                Ok(path) => Some(path),
                Err(e) => {
                    warn!("speech synthesis failed for {:?}: {e}", article.title);
                    None
                }
            },
            Err(e) => {
                warn!("translation failed for {:?}: {e}", article.title);
                None
            }
        };

        Briefing {
            title: article.title,
            source: article.source,
            published_at: article.published_at,
            summary,
            sentiment,
            audio,
            url: (!article.url.is_empty()).then_some(article.url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use nb_core::{Error, SymbolCandidate};
    use nb_store::MemoryStore;

    struct FakeSearch {
        candidates: Vec<SymbolCandidate>,
    }

    #[async_trait]
    impl SymbolSearch for FakeSearch {
        async fn search(&self, _query: &str) -> Result<Vec<SymbolCandidate>> {
            Ok(self.candidates.clone())
        }
    }

    struct FakeFallback;

    #[async_trait]
    impl TickerFallback for FakeFallback {
        async fn lookup(&self, _name: &str) -> Result<Option<String>> {
            Ok(None)
        }
    }

    struct FakeNews {
        articles: Vec<RawArticle>,
    }

    #[async_trait]
    impl NewsSource for FakeNews {
        async fn latest(&self, _company: &str) -> Result<Vec<RawArticle>> {
            Ok(self.articles.clone())
        }
    }

    struct FakeModel;

    #[async_trait]
    impl SummaryModel for FakeModel {
        async fn summarize(&self, _text: &str, _min: u32, _max: u32) -> Result<String> {
            Ok("A model-generated summary of the longer article.".to_string())
        }
    }

    struct EchoTranslator;

    #[async_trait]
    impl TranslationService for EchoTranslator {
        async fn translate(&self, text: &str, _source: &str, _target: &str) -> Result<String> {
            Ok(format!("hi::{text}"))
        }
    }

    struct FailingTranslator;

    #[async_trait]
    impl TranslationService for FailingTranslator {
        async fn translate(&self, _text: &str, _source: &str, _target: &str) -> Result<String> {
            Err(Error::Translation("translation down".to_string()))
        }
    }

    /// Fails whenever the text to synthesize contains the marker.
    struct MarkerSpeech {
        fail_marker: Option<String>,
    }

    #[async_trait]
    impl SpeechService for MarkerSpeech {
        async fn synthesize(
            &self,
            text: &str,
            _lang: &str,
            _filename: Option<&str>,
        ) -> Result<String> {
            if let Some(marker) = &self.fail_marker {
                if text.contains(marker.as_str()) {
                    return Err(Error::Speech("synthesis refused".to_string()));
                }
            }
            Ok("static/news_summary_test.mp3".to_string())
        }
    }

    fn common_stock(symbol: &str) -> SymbolCandidate {
        SymbolCandidate {
            symbol: symbol.to_string(),
            kind: "Common Stock".to_string(),
            description: String::new(),
        }
    }

    fn article(title: &str, content: &str) -> RawArticle {
        RawArticle {
            title: title.to_string(),
            content: content.to_string(),
            source: "Reuters".to_string(),
            url: format!("https://example.com/{title}"),
            published_at: "2024-03-01T12:00:00Z".to_string(),
        }
    }

    fn processor(
        candidates: Vec<SymbolCandidate>,
        articles: Vec<RawArticle>,
        translator: Arc<dyn TranslationService>,
        speech: Arc<dyn SpeechService>,
        store: Arc<dyn BriefingStore>,
    ) -> BriefingProcessor {
        BriefingProcessor::new(
            Arc::new(FakeSearch { candidates }),
            Arc::new(FakeFallback),
            Arc::new(FakeNews { articles }),
            Arc::new(FakeModel),
            translator,
            speech,
            store,
        )
    }

    #[tokio::test]
    async fn test_unknown_company_short_circuits() {
        let store = Arc::new(MemoryStore::new());
        let processor = processor(
            vec![],
            vec![article("ignored", "ignored")],
            Arc::new(EchoTranslator),
            Arc::new(MarkerSpeech { fail_marker: None }),
            store.clone(),
        );

        let briefing = processor.process("No Such Co").await.unwrap();
        assert!(!briefing.company_found);
        assert!(briefing.ticker.is_none());
        assert!(briefing.records.is_empty());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_short_and_long_articles() {
        let short_content = "Acme shares surged after record quarterly profits today.";
        let long_content = vec!["growth"; 80].join(" ");

        let store = Arc::new(MemoryStore::new());
        let processor = processor(
            vec![common_stock("ACME")],
            vec![
                article("short", short_content),
                article("long", &long_content),
            ],
            Arc::new(EchoTranslator),
            Arc::new(MarkerSpeech { fail_marker: None }),
            store.clone(),
        );

        let briefing = processor.process("Acme Corp").await.unwrap();
        assert!(briefing.company_found);
        assert_eq!(briefing.ticker.as_deref(), Some("ACME"));
        assert_eq!(briefing.records.len(), 2);

        // Output order matches input order.
        assert_eq!(briefing.records[0].title, "short");
        assert_eq!(briefing.records[1].title, "long");

        // Under 50 words: summary is the content, verbatim.
        assert_eq!(briefing.records[0].summary, short_content);
        // 80 words: the model's summary.
        assert_eq!(
            briefing.records[1].summary,
            "A model-generated summary of the longer article."
        );

        // Sentiment is recomputed from the article body, not the summary.
        assert_eq!(
            briefing.records[0].sentiment,
            nb_sentiment::analyze(short_content)
        );
        assert_eq!(
            briefing.records[1].sentiment,
            nb_sentiment::analyze(&long_content)
        );

        // Both articles got audio.
        assert!(briefing.records.iter().all(|r| r.audio.is_some()));

        // Records landed in the store, same order.
        let stored = store.all().await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].title, "short");
        assert_eq!(stored[1].title, "long");
    }

    #[tokio::test]
    async fn test_speech_failure_degrades_one_record() {
        let store = Arc::new(MemoryStore::new());
        let processor = processor(
            vec![common_stock("ACME")],
            vec![
                article("ok", "Profits rose sharply this quarter."),
                article("broken", "Shares fell. UNSPEAKABLE results."),
            ],
            Arc::new(EchoTranslator),
            Arc::new(MarkerSpeech {
                fail_marker: Some("UNSPEAKABLE".to_string()),
            }),
            store,
        );

        let briefing = processor.process("Acme Corp").await.unwrap();
        assert_eq!(briefing.records.len(), 2);
        assert!(briefing.records[0].audio.is_some());
        assert!(briefing.records[1].audio.is_none());
    }

    #[tokio::test]
    async fn test_translation_failure_degrades_audio_only() {
        let store = Arc::new(MemoryStore::new());
        let processor = processor(
            vec![common_stock("ACME")],
            vec![article("a", "Strong growth reported.")],
            Arc::new(FailingTranslator),
            Arc::new(MarkerSpeech { fail_marker: None }),
            store,
        );

        let briefing = processor.process("Acme Corp").await.unwrap();
        assert_eq!(briefing.records.len(), 1);
        assert!(briefing.records[0].audio.is_none());
        assert_eq!(briefing.records[0].summary, "Strong growth reported.");
    }

    #[tokio::test]
    async fn test_empty_news_is_normal() {
        let store = Arc::new(MemoryStore::new());
        let processor = processor(
            vec![common_stock("ACME")],
            vec![],
            Arc::new(EchoTranslator),
            Arc::new(MarkerSpeech { fail_marker: None }),
            store,
        );

        let briefing = processor.process("Acme Corp").await.unwrap();
        assert!(briefing.company_found);
        assert!(briefing.records.is_empty());
    }

    #[tokio::test]
    async fn test_missing_url_becomes_none() {
        let store = Arc::new(MemoryStore::new());
        let mut raw = article("a", "Short body.");
        raw.url = String::new();
        let processor = processor(
            vec![common_stock("ACME")],
            vec![raw],
            Arc::new(EchoTranslator),
            Arc::new(MarkerSpeech { fail_marker: None }),
            store,
        );

        let briefing = processor.process("Acme Corp").await.unwrap();
        assert!(briefing.records[0].url.is_none());
    }
}
