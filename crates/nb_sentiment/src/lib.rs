pub mod analyzer;
pub mod lexicon;

pub use analyzer::analyze;

pub mod prelude {
    pub use crate::analyze;
    pub use nb_core::types::{Sentiment, SentimentLabel};
}
