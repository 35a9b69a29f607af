//! Watchlist Orchestrator
//!
//! Wires the data providers, caches, and computation cores together.
//! Decides whether a stock has a dividend schedule at all, applies the
//! known-payer fallback for empty feeds, and caches inferred schedules
//! and AI insight responses behind the injected cache interface.

pub mod cache;

pub use cache::MemoryCache;

use std::sync::Arc;

use deal_ranker::WatchlistRanker;
use dividend_schedule::infer_schedule;
use sha2::{Digest, Sha256};
use tracing::{debug, info};
use watchlist_core::{
    ComputeCache, DividendEvent, DividendHistoryProvider, InferredSchedule, InsightsProvider,
    ScheduleResult, TrackedStock, WatchlistError,
};

pub struct WatchlistOrchestrator {
    provider: Arc<dyn DividendHistoryProvider>,
    insights_provider: Arc<dyn InsightsProvider>,
    schedule_cache: Arc<dyn ComputeCache<InferredSchedule>>,
    insights_cache: Arc<dyn ComputeCache<String>>,
    ranker: WatchlistRanker,
}

impl WatchlistOrchestrator {
    pub fn new(
        provider: Arc<dyn DividendHistoryProvider>,
        insights_provider: Arc<dyn InsightsProvider>,
    ) -> Self {
        Self {
            provider,
            insights_provider,
            schedule_cache: Arc::new(MemoryCache::new()),
            insights_cache: Arc::new(MemoryCache::new()),
            ranker: WatchlistRanker::new(),
        }
    }

    /// Swap in a custom schedule cache (tests, process-shared stores).
    pub fn with_schedule_cache(mut self, cache: Arc<dyn ComputeCache<InferredSchedule>>) -> Self {
        self.schedule_cache = cache;
        self
    }

    /// Swap in a custom insights cache.
    pub fn with_insights_cache(mut self, cache: Arc<dyn ComputeCache<String>>) -> Self {
        self.insights_cache = cache;
        self
    }

    /// Rank the watchlist in place, best deals first.
    pub fn rank_watchlist(&self, stocks: &mut [TrackedStock]) {
        self.ranker.rank(stocks);
    }

    /// Resolve the dividend schedule for one stock.
    ///
    /// Non-payers resolve to `Absent` without ever reaching inference.
    /// Known payers with an empty history feed get the assumed-quarterly
    /// fallback. Everything else runs through the cached inferencer,
    /// keyed by symbol plus a data version so a new payment invalidates
    /// the cached schedule.
    pub async fn schedule(&self, symbol: &str) -> Result<ScheduleResult, WatchlistError> {
        let snapshot = self.provider.snapshot(symbol).await?;
        if !snapshot.pays_dividends() {
            debug!(symbol, "no dividend on record, skipping schedule inference");
            return Ok(ScheduleResult::Absent);
        }

        let events = self.provider.dividend_history(symbol).await?;
        if events.is_empty() {
            info!(symbol, "dividend payer with empty history, assuming quarterly");
            return Ok(ScheduleResult::Present(InferredSchedule::assumed_quarterly()));
        }

        let key = schedule_cache_key(symbol, &events);
        let schedule = self
            .schedule_cache
            .get_or_compute(&key, &mut || infer_schedule(&events));
        Ok(ScheduleResult::Present(schedule))
    }

    /// Fetch AI portfolio insights, cached by prompt content hash so a
    /// repeated prompt never pays for a second provider round trip.
    pub async fn insights(&self, prompt: &str) -> Result<String, WatchlistError> {
        let key = format!("insights:{}", hex::encode(Sha256::digest(prompt.as_bytes())));
        if let Some(hit) = self.insights_cache.get(&key) {
            debug!("insights cache hit");
            return Ok(hit);
        }

        info!("requesting portfolio insights");
        let text = self.insights_provider.portfolio_insights(prompt).await?;
        self.insights_cache.insert(&key, text.clone());
        Ok(text)
    }
}

/// Cache key carrying the stock identity and a data version.
fn schedule_cache_key(symbol: &str, events: &[DividendEvent]) -> String {
    let latest = events
        .iter()
        .map(|event| event.pay_date)
        .max()
        .map(|date| date.to_string())
        .unwrap_or_default();
    format!("schedule:{}:{}:{}", symbol, events.len(), latest)
}
