//! Calendar Period
//!
//! A years/months/days difference between two dates. Chrono only offers
//! exact `Duration`s, so the borrowing rule lives here while month lengths and
//! leap years stay with chrono:
//!   • whole months are counted first
//!   • if the end's day-of-month is smaller than the start's, one month is
//!     borrowed and the leftover days are counted exactly
//!   • month addition clamps to the last day of the target month
//!     (Jan 31 + 1 month = Feb 28/29)

use chrono::{Datelike, Months, NaiveDate};

/// Calendar period between two ordered dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Period {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl Period {
    /// Period from `start` to `end`. `start` must not be after `end`.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "period start {start} is after end {end}");

        let mut total_months = month_index(end) - month_index(start);
        if end.day() < start.day() {
            total_months -= 1;
        }
        let total_months = u32::try_from(total_months).unwrap_or(0);

        // start + total_months never passes end
        let anchor = start
            .checked_add_months(Months::new(total_months))
            .unwrap_or(end);
        let days = u32::try_from((end - anchor).num_days()).unwrap_or(0);

        Self {
            years: total_months / 12,
            months: total_months % 12,
            days,
        }
    }
}

/// Months since year 0, so that differences count calendar months.
fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}
