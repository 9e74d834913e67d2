use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use nb_core::{Briefing, BriefingStore, Result};

/// Insertion-ordered, append-only in-memory store. Lives for the process
/// lifetime; concurrent pipeline runs share it through the lock.
#[derive(Clone, Default)]
pub struct MemoryStore {
    briefings: Arc<RwLock<Vec<Briefing>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.briefings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.briefings.read().await.is_empty()
    }
}

#[async_trait]
impl BriefingStore for MemoryStore {
    async fn append(&self, briefing: Briefing) -> Result<()> {
        self.briefings.write().await.push(briefing);
        Ok(())
    }

    async fn query(&self, keyword: &str, min_score: f64, max_score: f64) -> Result<Vec<Briefing>> {
        let keyword = keyword.to_lowercase();
        let briefings = self.briefings.read().await;
        Ok(briefings
            .iter()
            .filter(|b| {
                b.summary.to_lowercase().contains(&keyword)
                    && b.sentiment.score >= min_score
                    && b.sentiment.score <= max_score
            })
            .cloned()
            .collect())
    }

    async fn all(&self) -> Result<Vec<Briefing>> {
        Ok(self.briefings.read().await.clone())
    }
}
