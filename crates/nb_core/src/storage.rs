use async_trait::async_trait;

use crate::types::Briefing;
use crate::Result;

/// Append-only, insertion-ordered collection of processed briefings.
/// Duplicates are allowed; repeated fetches for the same company simply
/// append again.
#[async_trait]
pub trait BriefingStore: Send + Sync {
    /// Append a briefing at the end of the collection.
    async fn append(&self, briefing: Briefing) -> Result<()>;

    /// All briefings whose summary contains `keyword` (case-insensitive)
    /// and whose sentiment score lies in `[min_score, max_score]`,
    /// in insertion order. An empty result is a normal outcome.
    async fn query(&self, keyword: &str, min_score: f64, max_score: f64) -> Result<Vec<Briefing>>;

    /// Snapshot of everything stored, in insertion order.
    async fn all(&self) -> Result<Vec<Briefing>>;
}
