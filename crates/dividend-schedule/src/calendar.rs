//! Dividend Calendar Module
//!
//! Projects an inferred schedule onto the January..December grid the UI
//! renders: which months expect a payment, which only saw a shifted one,
//! and the most recent amount observed in each.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use watchlist_core::{DividendEvent, InferredSchedule};

/// One cell of the 12-month dividend calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarMonth {
    /// Calendar month, 1-indexed
    pub month: u32,
    /// The regular cadence expects a payment here
    pub expected: bool,
    /// A payment landed here outside the regular cadence
    pub shifted: bool,
    /// Most recent amount observed in this month, if any
    pub last_amount: Option<Decimal>,
}

/// Build the 12-month grid for a schedule and its underlying history.
pub fn dividend_calendar(
    schedule: &InferredSchedule,
    events: &[DividendEvent],
) -> [CalendarMonth; 12] {
    std::array::from_fn(|index| {
        let month = index as u32 + 1;
        let last_amount = events
            .iter()
            .filter(|event| event.pay_date.month() == month && event.amount > Decimal::ZERO)
            .max_by_key(|event| event.pay_date)
            .map(|event| event.amount);

        CalendarMonth {
            month,
            expected: schedule.expects_month(month),
            shifted: schedule.is_shifted_month(month),
            last_amount,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infer_schedule;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn event(year: i32, month: u32, amount: Decimal) -> DividendEvent {
        DividendEvent {
            pay_date: NaiveDate::from_ymd_opt(year, month, 15).unwrap(),
            amount,
        }
    }

    #[test]
    fn grid_covers_all_twelve_months_in_order() {
        let schedule = InferredSchedule::empty();
        let grid = dividend_calendar(&schedule, &[]);
        let months: Vec<u32> = grid.iter().map(|cell| cell.month).collect();
        assert_eq!(months, (1..=12).collect::<Vec<u32>>());
        assert!(grid.iter().all(|cell| !cell.expected && !cell.shifted));
    }

    #[test]
    fn expected_and_shifted_flags_follow_the_schedule() {
        let mut events = Vec::new();
        for year in 2021..=2023 {
            for month in [2, 5, 8, 11] {
                events.push(event(year, month, dec!(0.30)));
            }
        }
        events.push(event(2022, 3, dec!(0.30)));

        let schedule = infer_schedule(&events);
        let grid = dividend_calendar(&schedule, &events);

        assert!(grid[1].expected && !grid[1].shifted); // February
        assert!(!grid[2].expected && grid[2].shifted); // March
        assert!(!grid[0].expected && !grid[0].shifted); // January
    }

    #[test]
    fn last_amount_is_the_most_recent_in_that_month() {
        let events = vec![
            event(2022, 5, dec!(0.40)),
            event(2023, 5, dec!(0.44)),
            event(2021, 5, dec!(0.36)),
        ];
        let schedule = infer_schedule(&events);
        let grid = dividend_calendar(&schedule, &events);
        assert_eq!(grid[4].last_amount, Some(dec!(0.44)));
        assert_eq!(grid[0].last_amount, None);
    }
}
