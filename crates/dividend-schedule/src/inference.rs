//! Schedule Inference Module
//!
//! Works out how often a stock pays dividends, and in which calendar
//! months, from nothing but its payment history. Real feeds skip months,
//! double up, or slide a payment into the neighboring month, so the
//! cadence is read from months that pay in most observed years and
//! everything else is reported as a shifted month.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Datelike;
use rust_decimal::Decimal;
use watchlist_core::{DividendEvent, InferredSchedule, PaymentFrequency};

/// Cadence buckets, ordered by regular-month count.
const FREQUENCY_BUCKETS: [(u32, PaymentFrequency); 4] = [
    (1, PaymentFrequency::Annual),
    (2, PaymentFrequency::SemiAnnual),
    (4, PaymentFrequency::Quarterly),
    (12, PaymentFrequency::Monthly),
];

/// Infer the recurring payment schedule from a payment history.
///
/// Pure and total: any input, in any order, yields a schedule. With no
/// usable events the schedule is `Unknown` with empty month sets.
/// `payment_months` and `shifted_payment_months` come out sorted and
/// disjoint, and the frequency is `Unknown` exactly when `payment_months`
/// is empty.
pub fn infer_schedule(events: &[DividendEvent]) -> InferredSchedule {
    // Feeds occasionally carry zero-amount placeholder rows; they are not
    // evidence of a payment.
    let events: Vec<&DividendEvent> = events
        .iter()
        .filter(|event| event.amount > Decimal::ZERO)
        .collect();

    if events.is_empty() {
        return InferredSchedule::empty();
    }

    // Distinct payment years per month-of-year. Grouping drops the year,
    // so a Dec..Jan history lands on two month buckets, never four.
    let mut years_by_month: BTreeMap<u32, BTreeSet<i32>> = BTreeMap::new();
    for event in &events {
        years_by_month
            .entry(event.pay_date.month())
            .or_default()
            .insert(event.pay_date.year());
    }

    let first_year = events.iter().map(|e| e.pay_date.year()).min().unwrap_or(0);
    let last_year = events.iter().map(|e| e.pay_date.year()).max().unwrap_or(0);
    let spanned_years = (last_year - first_year + 1) as u32;

    // A month is regular when it paid in at least half the spanned years.
    let mut regular: Vec<(u32, usize)> = years_by_month
        .iter()
        .filter(|(_, years)| 2 * years.len() as u32 >= spanned_years)
        .map(|(&month, years)| (month, years.len()))
        .collect();

    let frequency = classify_frequency(regular.len() as u32);

    // Keep the most-regular observed months up to the cadence's expected
    // count. Observed months only, never an idealized evenly spaced grid.
    let expected = frequency.payments_per_year().unwrap_or(0) as usize;
    regular.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    let mut payment_months: Vec<u32> = regular
        .into_iter()
        .take(expected)
        .map(|(month, _)| month)
        .collect();
    payment_months.sort_unstable();

    // Whatever paid at least once but did not make the regular cadence is
    // timing drift.
    let shifted_payment_months: Vec<u32> = years_by_month
        .keys()
        .copied()
        .filter(|month| !payment_months.contains(month))
        .collect();

    InferredSchedule {
        frequency,
        payment_months,
        shifted_payment_months,
    }
}

/// Map a regular-month count onto the nearest cadence bucket.
///
/// Exact counts win. In-between counts go to the nearest of {1, 2, 4, 12},
/// ties rounding to the higher cadence: 3 regular months classify as
/// quarterly, 8 as monthly. Zero regular months means no stable pattern.
fn classify_frequency(regular_months: u32) -> PaymentFrequency {
    if regular_months == 0 {
        return PaymentFrequency::Unknown;
    }

    // Buckets are scanned in ascending count order with `<=`, so on a tie
    // the later (higher-cadence) bucket wins.
    let mut best = FREQUENCY_BUCKETS[0];
    for bucket in FREQUENCY_BUCKETS {
        if bucket.0.abs_diff(regular_months) <= best.0.abs_diff(regular_months) {
            best = bucket;
        }
    }
    best.1
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rust_decimal_macros::dec;

    fn event(year: i32, month: u32, day: u32) -> DividendEvent {
        DividendEvent {
            pay_date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            amount: dec!(0.25),
        }
    }

    #[test]
    fn empty_history_is_unknown() {
        let schedule = infer_schedule(&[]);
        assert_eq!(schedule.frequency, PaymentFrequency::Unknown);
        assert!(schedule.payment_months.is_empty());
        assert!(schedule.shifted_payment_months.is_empty());
    }

    #[test]
    fn zero_amount_rows_are_ignored() {
        let placeholder = DividendEvent {
            pay_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            amount: Decimal::ZERO,
        };
        let schedule = infer_schedule(&[placeholder]);
        assert_eq!(schedule.frequency, PaymentFrequency::Unknown);
        assert!(schedule.payment_months.is_empty());
    }

    #[test]
    fn single_event_infers_annual() {
        let schedule = infer_schedule(&[event(2024, 6, 14)]);
        assert_eq!(schedule.frequency, PaymentFrequency::Annual);
        assert_eq!(schedule.payment_months, vec![6]);
        assert!(schedule.shifted_payment_months.is_empty());
    }

    #[test]
    fn steady_quarterly_payer() {
        let mut events = Vec::new();
        for year in 2021..=2023 {
            for month in [2, 5, 8, 11] {
                events.push(event(year, month, 15));
            }
        }
        let schedule = infer_schedule(&events);
        assert_eq!(schedule.frequency, PaymentFrequency::Quarterly);
        assert_eq!(schedule.payment_months, vec![2, 5, 8, 11]);
        assert!(schedule.shifted_payment_months.is_empty());
    }

    #[test]
    fn one_off_extra_payment_is_shifted_not_regular() {
        let mut events = Vec::new();
        for year in 2021..=2023 {
            for month in [2, 5, 8, 11] {
                events.push(event(year, month, 15));
            }
        }
        events.push(event(2022, 3, 1));
        let schedule = infer_schedule(&events);
        assert_eq!(schedule.frequency, PaymentFrequency::Quarterly);
        assert_eq!(schedule.payment_months, vec![2, 5, 8, 11]);
        assert_eq!(schedule.shifted_payment_months, vec![3]);
    }

    #[test]
    fn monthly_payer_keeps_all_twelve_months() {
        let mut events = Vec::new();
        for year in 2022..=2024 {
            for month in 1..=12 {
                events.push(event(year, month, 10));
            }
        }
        let schedule = infer_schedule(&events);
        assert_eq!(schedule.frequency, PaymentFrequency::Monthly);
        assert_eq!(schedule.payment_months, (1..=12).collect::<Vec<u32>>());
        assert!(schedule.shifted_payment_months.is_empty());
    }

    #[test]
    fn semi_annual_payer() {
        let mut events = Vec::new();
        for year in 2020..=2024 {
            events.push(event(year, 4, 28));
            events.push(event(year, 10, 28));
        }
        let schedule = infer_schedule(&events);
        assert_eq!(schedule.frequency, PaymentFrequency::SemiAnnual);
        assert_eq!(schedule.payment_months, vec![4, 10]);
    }

    #[test]
    fn input_order_does_not_matter() {
        let forward = vec![event(2022, 2, 1), event(2022, 5, 1), event(2023, 2, 1), event(2023, 5, 1)];
        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(infer_schedule(&forward), infer_schedule(&reversed));
    }

    #[test]
    fn year_boundary_history_groups_by_month_of_year() {
        // Dec 2023 + Jan 2024 spans two calendar years but only two months.
        let events = vec![event(2023, 12, 28), event(2024, 1, 5)];
        let schedule = infer_schedule(&events);
        assert_eq!(schedule.payment_months.len(), 2);
        assert!(schedule.expects_month(1));
        assert!(schedule.expects_month(12));
    }

    #[test]
    fn frequency_bucket_rounding() {
        assert_eq!(classify_frequency(0), PaymentFrequency::Unknown);
        assert_eq!(classify_frequency(1), PaymentFrequency::Annual);
        assert_eq!(classify_frequency(2), PaymentFrequency::SemiAnnual);
        // Tie between 2 and 4 rounds up.
        assert_eq!(classify_frequency(3), PaymentFrequency::Quarterly);
        assert_eq!(classify_frequency(4), PaymentFrequency::Quarterly);
        assert_eq!(classify_frequency(5), PaymentFrequency::Quarterly);
        assert_eq!(classify_frequency(6), PaymentFrequency::Quarterly);
        assert_eq!(classify_frequency(7), PaymentFrequency::Quarterly);
        // Tie between 4 and 12 rounds up.
        assert_eq!(classify_frequency(8), PaymentFrequency::Monthly);
        assert_eq!(classify_frequency(12), PaymentFrequency::Monthly);
    }

    #[test]
    fn month_sets_stay_disjoint_over_random_histories() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..250 {
            let count = rng.random_range(0..40);
            let events: Vec<DividendEvent> = (0..count)
                .map(|_| {
                    event(
                        rng.random_range(2018..=2025),
                        rng.random_range(1..=12),
                        rng.random_range(1..=28),
                    )
                })
                .collect();

            let schedule = infer_schedule(&events);
            for month in &schedule.payment_months {
                assert!(
                    !schedule.shifted_payment_months.contains(month),
                    "month {month} in both sets for {events:?}"
                );
            }
            assert_eq!(
                schedule.frequency == PaymentFrequency::Unknown,
                schedule.payment_months.is_empty(),
                "unknown frequency must coincide with empty payment months"
            );
            for month in schedule
                .payment_months
                .iter()
                .chain(&schedule.shifted_payment_months)
            {
                assert!((1..=12).contains(month));
            }
        }
    }
}
