use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback values used when the news service omits a field.
pub const NO_TITLE: &str = "No Title";
pub const NO_CONTENT: &str = "No Content";
pub const UNKNOWN_SOURCE: &str = "Unknown";
pub const UNKNOWN_DATE: &str = "Unknown Date";

/// An article as returned by the news aggregation service, before any
/// processing. Discarded once the matching [`Briefing`] has been built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawArticle {
    pub title: String,
    pub content: String,
    pub source: String,
    pub url: String,
    /// Publication timestamp in whatever format the upstream service uses.
    pub published_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Classify a compound score: >= 0.05 positive, <= -0.05 negative,
    /// neutral in between.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.05 {
            Self::Positive
        } else if score <= -0.05 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "Positive"),
            Self::Negative => write!(f, "Negative"),
            Self::Neutral => write!(f, "Neutral"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    /// Compound polarity in [-1.0, 1.0].
    pub score: f64,
}

impl Sentiment {
    pub fn neutral() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            score: 0.0,
        }
    }
}

/// A fully processed article: summarized, scored and (when synthesis
/// succeeded) paired with a Hindi audio rendition of its summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Briefing {
    pub title: String,
    pub source: String,
    pub published_at: String,
    pub summary: String,
    pub sentiment: Sentiment,
    /// Path of the synthesized audio artifact, absent when translation or
    /// synthesis failed for this article.
    pub audio: Option<String>,
    pub url: Option<String>,
}

/// Result of running the pipeline for one company name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyBriefing {
    pub company: String,
    pub ticker: Option<String>,
    pub company_found: bool,
    pub records: Vec<Briefing>,
    pub generated_at: DateTime<Utc>,
}

impl CompanyBriefing {
    pub fn not_found(company: &str) -> Self {
        Self {
            company: company.to_string(),
            ticker: None,
            company_found: false,
            records: Vec::new(),
            generated_at: Utc::now(),
        }
    }
}

/// Outcome of ticker resolution. A lookup that errored on both services
/// surfaces as `Err`, so callers can tell "unknown company" apart from
/// "lookup broken".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickerResolution {
    Resolved(String),
    NotFound,
}

/// A candidate returned by the symbol search service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolCandidate {
    pub symbol: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_thresholds() {
        assert_eq!(SentimentLabel::from_score(0.05), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(0.9), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-0.05), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(-0.9), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(0.049), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.049), SentimentLabel::Neutral);
    }

    #[test]
    fn test_not_found_briefing() {
        let briefing = CompanyBriefing::not_found("Acme Corp");
        assert!(!briefing.company_found);
        assert!(briefing.ticker.is_none());
        assert!(briefing.records.is_empty());
    }

    #[test]
    fn test_symbol_candidate_type_field() {
        let candidate: SymbolCandidate =
            serde_json::from_str(r#"{"symbol": "ACME", "type": "Common Stock"}"#).unwrap();
        assert_eq!(candidate.symbol, "ACME");
        assert_eq!(candidate.kind, "Common Stock");
        assert!(candidate.description.is_empty());
    }
}
