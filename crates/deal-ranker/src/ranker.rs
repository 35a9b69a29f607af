//! Watchlist Ranking Module
//!
//! Ranks tracked stocks by target-price proximity: deepest discounts
//! first, stocks without a usable price or target in the middle, worst
//! overshoots last.

use rust_decimal::Decimal;
use watchlist_core::TrackedStock;

/// Sort-key offset applied to stocks trading above target.
///
/// Contract: strictly greater than any key the other tiers can produce.
/// Below-target keys are always <= 0 and the no-data key is exactly 1,
/// so adding this to a positive overshoot percentage puts every
/// above-target stock after both tiers while preserving their relative
/// order. Real percentage differences never come near this value.
const ABOVE_TARGET_OFFSET: Decimal = Decimal::ONE_THOUSAND;

/// Sort key for a stock with no price or no target: after every
/// below-target key (<= 0), before every above-target key.
const NO_SIGNAL_KEY: Decimal = Decimal::ONE;

/// Ranks watchlist entries by deal quality.
pub struct WatchlistRanker;

impl Default for WatchlistRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl WatchlistRanker {
    pub fn new() -> Self {
        Self
    }

    /// Sort stocks in place, best deals first.
    ///
    /// Stable: equal keys keep their insertion order. Total: every stock
    /// gets a key, so no pairing ever panics and nothing is dropped.
    pub fn rank(&self, stocks: &mut [TrackedStock]) {
        stocks.sort_by_key(Self::priority);
    }

    /// Convenience wrapper returning the ranked list.
    pub fn ranked(&self, mut stocks: Vec<TrackedStock>) -> Vec<TrackedStock> {
        self.rank(&mut stocks);
        stocks
    }

    /// Sort key for one stock; lower sorts earlier.
    ///
    /// Three tiers:
    /// - at or below target: `-|diff%|`, so deeper discounts sort first
    /// - missing price or target: fixed middle key
    /// - above target: `diff% + ABOVE_TARGET_OFFSET`, smaller overshoot first
    fn priority(stock: &TrackedStock) -> Decimal {
        let (price, target) = match (stock.price, stock.target_price) {
            (Some(price), Some(target)) => (price, target),
            _ => return NO_SIGNAL_KEY,
        };

        // Signed percentage distance from target. A zero target carries no
        // signal, treat it as exactly on target.
        let diff = if target.is_zero() {
            Decimal::ZERO
        } else {
            (price - target) / target * Decimal::ONE_HUNDRED
        };

        if diff <= Decimal::ZERO {
            -diff.abs()
        } else {
            diff + ABOVE_TARGET_OFFSET
        }
    }
}
