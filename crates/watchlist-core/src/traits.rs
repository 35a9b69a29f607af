use crate::{DividendEvent, StockSnapshot, WatchlistError};
use async_trait::async_trait;

/// Trait for market data providers supplying prices and dividend history
#[async_trait]
pub trait DividendHistoryProvider: Send + Sync {
    /// Current price and declared dividend for a symbol
    async fn snapshot(&self, symbol: &str) -> Result<StockSnapshot, WatchlistError>;

    /// Past dividend payments for a symbol, any order
    async fn dividend_history(&self, symbol: &str)
        -> Result<Vec<DividendEvent>, WatchlistError>;
}

/// Trait for AI insight providers. The provider owns prompt construction
/// and transport; callers see structured text only.
#[async_trait]
pub trait InsightsProvider: Send + Sync {
    async fn portfolio_insights(&self, prompt: &str) -> Result<String, WatchlistError>;
}

/// Get-or-compute cache over string keys.
///
/// Injected wherever computed values are reused across requests, so the
/// computation cores stay pure and tests can swap in their own store.
pub trait ComputeCache<V: Clone + Send + Sync>: Send + Sync {
    fn get(&self, key: &str) -> Option<V>;

    fn insert(&self, key: &str, value: V);

    /// Return the cached value for `key`, computing and storing it on a miss.
    fn get_or_compute(&self, key: &str, producer: &mut dyn FnMut() -> V) -> V {
        if let Some(hit) = self.get(key) {
            return hit;
        }
        let value = producer();
        self.insert(key, value.clone());
        value
    }
}
