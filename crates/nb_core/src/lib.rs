pub mod error;
pub mod services;
pub mod storage;
pub mod types;

pub use error::Error;
pub use services::{
    NewsSource, SpeechService, SummaryModel, SymbolSearch, TickerFallback, TranslationService,
};
pub use storage::BriefingStore;
pub use types::{
    Briefing, CompanyBriefing, RawArticle, Sentiment, SentimentLabel, SymbolCandidate,
    TickerResolution,
};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::storage::BriefingStore;
    pub use crate::types::{Briefing, CompanyBriefing, RawArticle, Sentiment, SentimentLabel};
    pub use crate::{Error, Result};
}
