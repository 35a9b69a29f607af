//! Dividend Schedule
//!
//! Infers a recurring payment schedule from raw dividend history, and
//! derives the calendar grid and summary figures built on top of it.

pub mod calendar;
pub mod inference;
pub mod summary;

pub use calendar::{dividend_calendar, CalendarMonth};
pub use inference::infer_schedule;
pub use summary::{DividendScoreWeights, DividendSummary};
