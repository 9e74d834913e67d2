pub mod config;
pub mod finnhub;
pub mod hf;
pub mod newsapi;
pub mod translate;
pub mod tts;
pub mod yahoo;

pub use config::ProviderConfig;
pub use finnhub::FinnhubClient;
pub use hf::HfSummaryModel;
pub use newsapi::NewsApiClient;
pub use translate::GoogleTranslateClient;
pub use tts::GttsClient;
pub use yahoo::YahooTickerClient;

pub mod prelude {
    pub use crate::config::ProviderConfig;
    pub use crate::{
        FinnhubClient, GoogleTranslateClient, GttsClient, HfSummaryModel, NewsApiClient,
        YahooTickerClient,
    };
    pub use nb_core::{Error, Result};
}
