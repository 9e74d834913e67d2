use std::sync::Arc;

use tracing::warn;

use nb_core::SummaryModel;

/// Bodies shorter than this many whitespace-delimited words are returned
/// unchanged, the model is never consulted for them.
pub const MIN_WORDS_FOR_MODEL: usize = 50;
pub const MIN_SUMMARY_LENGTH: u32 = 30;
pub const MAX_SUMMARY_LENGTH: u32 = 100;

pub const NO_SUMMARY: &str = "No summary available.";
pub const SUMMARY_FAILED: &str = "Failed to generate summary.";

/// Summarization policy wrapped around an abstractive model. Always
/// produces a string; model failures degrade to a sentinel instead of
/// propagating.
pub struct Summarizer {
    model: Arc<dyn SummaryModel>,
}

impl Summarizer {
    pub fn new(model: Arc<dyn SummaryModel>) -> Self {
        Self { model }
    }

    pub async fn summarize(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return NO_SUMMARY.to_string();
        }
        if text.split_whitespace().count() < MIN_WORDS_FOR_MODEL {
            return text.to_string();
        }

        match self
            .model
            .summarize(text, MIN_SUMMARY_LENGTH, MAX_SUMMARY_LENGTH)
            .await
        {
            Ok(summary) => summary,
            Err(e) => {
                warn!("summarization failed: {e}");
                SUMMARY_FAILED.to_string()
            }
        }
    }
}
