use std::sync::Arc;

use tracing::warn;

use nb_core::{Result, SymbolSearch, TickerFallback, TickerResolution};

/// Candidate type designation accepted from the primary search.
pub const COMMON_STOCK: &str = "Common Stock";

/// Two-stage ticker resolution: primary symbol search first, free-text
/// fallback when it misses or errors. Only a failure of both services
/// surfaces as `Err`; an unknown company is `NotFound`.
pub struct TickerResolver {
    primary: Arc<dyn SymbolSearch>,
    fallback: Arc<dyn TickerFallback>,
}

impl TickerResolver {
    pub fn new(primary: Arc<dyn SymbolSearch>, fallback: Arc<dyn TickerFallback>) -> Self {
        Self { primary, fallback }
    }

    pub async fn resolve(&self, company: &str) -> Result<TickerResolution> {
        match self.primary.search(company).await {
            Ok(candidates) => {
                if let Some(candidate) = candidates.into_iter().find(|c| c.kind == COMMON_STOCK) {
                    return Ok(TickerResolution::Resolved(candidate.symbol));
                }
            }
            Err(e) => warn!("primary symbol search failed for {company}: {e}"),
        }

        match self.fallback.lookup(company).await? {
            Some(symbol) => Ok(TickerResolution::Resolved(symbol)),
            None => Ok(TickerResolution::NotFound),
        }
    }
}
