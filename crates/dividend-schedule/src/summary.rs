//! Dividend Summary Module
//!
//! Headline figures derived from a payment history: annualized amount,
//! current yield, growth rate, and the weighted badge score.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use watchlist_core::{DividendEvent, PaymentFrequency};

/// Headline dividend figures for one stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividendSummary {
    /// Latest payment annualized by the inferred cadence
    pub annual_dividend: Option<Decimal>,
    /// Annual dividend as a percentage of the current price
    pub current_yield_pct: Option<Decimal>,
    /// Annualized growth across the observed payments
    pub growth_rate_pct: Option<f64>,
}

impl DividendSummary {
    /// Derive summary figures from history, the inferred cadence, and the
    /// current price. Total: missing inputs yield `None` fields, never an
    /// error.
    pub fn from_history(
        events: &[DividendEvent],
        frequency: PaymentFrequency,
        price: Option<Decimal>,
    ) -> Self {
        let mut paid: Vec<&DividendEvent> = events
            .iter()
            .filter(|event| event.amount > Decimal::ZERO)
            .collect();
        paid.sort_by_key(|event| std::cmp::Reverse(event.pay_date));

        let annual_dividend = match (paid.first(), frequency.payments_per_year()) {
            (Some(latest), Some(per_year)) => Some(latest.amount * Decimal::from(per_year)),
            _ => None,
        };

        let current_yield_pct = match (annual_dividend, price) {
            (Some(annual), Some(price)) if annual > Decimal::ZERO && price > Decimal::ZERO => {
                Some(annual / price * Decimal::ONE_HUNDRED)
            }
            _ => None,
        };

        Self {
            annual_dividend,
            current_yield_pct,
            growth_rate_pct: growth_rate(&paid),
        }
    }
}

/// Annualized growth rate across the observed amounts, newest first.
/// Says nothing on fewer than five observations.
fn growth_rate(paid: &[&DividendEvent]) -> Option<f64> {
    if paid.len() < 5 {
        return None;
    }
    let recent = paid.first()?.amount.to_f64()?;
    let oldest = paid.last()?.amount.to_f64()?;
    if oldest <= 0.0 {
        return None;
    }
    let periods = paid.len() as f64 - 1.0;
    Some(((recent / oldest).powf(1.0 / periods) - 1.0) * 100.0)
}

/// Weights for the dividend quality score shown as a UI badge.
#[derive(Debug, Clone)]
pub struct DividendScoreWeights {
    pub yield_weight: f64,
    pub payout_weight: f64,
    pub growth_weight: f64,
}

impl Default for DividendScoreWeights {
    fn default() -> Self {
        Self {
            yield_weight: 0.5,
            payout_weight: 0.3,
            growth_weight: 0.2,
        }
    }
}

impl DividendScoreWeights {
    /// Blend yield, payout ratio, and growth into a 0-100 score.
    ///
    /// Unknown payout or growth scores a neutral 50; no yield at all
    /// scores that component 0.
    pub fn score(&self, summary: &DividendSummary, payout_ratio_pct: Option<f64>) -> f64 {
        // An 8% yield saturates the yield component.
        let yield_score = summary
            .current_yield_pct
            .and_then(|y| y.to_f64())
            .map(|y| (y / 8.0 * 100.0).clamp(0.0, 100.0))
            .unwrap_or(0.0);

        // Lower payout leaves more room to keep paying.
        let payout_score = payout_ratio_pct
            .map(|p| (100.0 - p).clamp(0.0, 100.0))
            .unwrap_or(50.0);

        // 10%/yr dividend growth saturates the growth component.
        let growth_score = summary
            .growth_rate_pct
            .map(|g| (g / 10.0 * 100.0).clamp(0.0, 100.0))
            .unwrap_or(50.0);

        (yield_score * self.yield_weight
            + payout_score * self.payout_weight
            + growth_score * self.growth_weight)
            .clamp(0.0, 100.0)
    }
}
