use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A watchlist entry at ranking time.
///
/// Built fresh per ranking request from the persisted stock and the user's
/// watchlist membership; the ranker only reorders, never mutates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedStock {
    /// Stock symbol
    pub symbol: String,
    /// Latest market price, if a quote is available
    pub price: Option<Decimal>,
    /// User-set target entry price
    pub target_price: Option<Decimal>,
}

/// One historical dividend payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DividendEvent {
    pub pay_date: NaiveDate,
    pub amount: Decimal,
}

/// Point-in-time provider view of a stock, used to decide whether a
/// dividend schedule exists at all before any inference runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSnapshot {
    pub symbol: String,
    pub price: Option<Decimal>,
    /// Declared annual dividend per share; `None` or zero means non-payer
    pub annual_dividend: Option<Decimal>,
}

impl StockSnapshot {
    pub fn pays_dividends(&self) -> bool {
        matches!(self.annual_dividend, Some(amount) if amount > Decimal::ZERO)
    }
}

/// Inferred cadence class of dividend payments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentFrequency {
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
    Unknown,
}

impl PaymentFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "monthly",
            PaymentFrequency::Quarterly => "quarterly",
            PaymentFrequency::SemiAnnual => "semi_annual",
            PaymentFrequency::Annual => "annual",
            PaymentFrequency::Unknown => "unknown",
        }
    }

    /// Expected number of payments per calendar year, `None` for `Unknown`.
    pub fn payments_per_year(&self) -> Option<u32> {
        match self {
            PaymentFrequency::Monthly => Some(12),
            PaymentFrequency::Quarterly => Some(4),
            PaymentFrequency::SemiAnnual => Some(2),
            PaymentFrequency::Annual => Some(1),
            PaymentFrequency::Unknown => None,
        }
    }
}

/// A recurring payment schedule inferred from dividend history.
///
/// Months are 1-indexed (January = 1). `payment_months` holds the regular
/// cadence; `shifted_payment_months` holds months that received a payment
/// outside that cadence. The two lists are sorted, and always disjoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferredSchedule {
    pub frequency: PaymentFrequency,
    pub payment_months: Vec<u32>,
    pub shifted_payment_months: Vec<u32>,
}

impl InferredSchedule {
    /// Schedule for a stock with no usable payment history.
    pub fn empty() -> Self {
        Self {
            frequency: PaymentFrequency::Unknown,
            payment_months: Vec::new(),
            shifted_payment_months: Vec::new(),
        }
    }

    /// Fallback for a known dividend payer whose history feed came back
    /// empty: assume the most common cadence instead of reporting an
    /// unknown schedule. Product policy for incomplete data, applied at
    /// the call boundary only — inference itself never returns this shape.
    pub fn assumed_quarterly() -> Self {
        Self {
            frequency: PaymentFrequency::Quarterly,
            payment_months: Vec::new(),
            shifted_payment_months: Vec::new(),
        }
    }

    /// Whether the regular cadence expects a payment in `month` (1-12).
    pub fn expects_month(&self, month: u32) -> bool {
        self.payment_months.contains(&month)
    }

    /// Whether `month` saw a payment outside the regular cadence.
    pub fn is_shifted_month(&self, month: u32) -> bool {
        self.shifted_payment_months.contains(&month)
    }
}

/// Schedule outcome decided once at the call boundary: stocks that pay no
/// dividend resolve to `Absent`, not to an `Unknown` schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "schedule", rename_all = "snake_case")]
pub enum ScheduleResult {
    Present(InferredSchedule),
    Absent,
}

impl ScheduleResult {
    pub fn schedule(&self) -> Option<&InferredSchedule> {
        match self {
            ScheduleResult::Present(schedule) => Some(schedule),
            ScheduleResult::Absent => None,
        }
    }
}
