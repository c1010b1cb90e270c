//! Domain Services
//!
//! Pure age and life-expectancy logic. Every function takes "today"
//! explicitly; none of them read the clock.
//!
//! ## Leap-day birthdates
//! The anniversary of a Feb 29 birthdate in a common year is Mar 1. Both the
//! age count and the horizon date follow this rule, so the horizon is reached
//! exactly on the day the age reaches the expectancy.

use chrono::{Datelike, NaiveDate};

use crate::domain::entities::TimeRemaining;
use crate::domain::period::Period;
use crate::domain::value_objects::{Birthdate, Gender};

/// Whole years elapsed between `birthdate` and `today`.
pub fn age_in_years(birthdate: &Birthdate, today: NaiveDate) -> u32 {
    Period::between(birthdate.date(), today).years
}

/// The `years`-th anniversary of `date`.
///
/// Returns `None` only past the last representable year.
pub fn anniversary(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    let year = date.year().checked_add(i32::try_from(years).ok()?)?;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Birthdate plus the gender's life expectancy.
pub fn horizon_date(birthdate: &Birthdate, gender: Gender) -> NaiveDate {
    // a horizon beyond the calendar is never reached
    anniversary(birthdate.date(), gender.life_expectancy_years()).unwrap_or(NaiveDate::MAX)
}

/// Years and days left until the horizon, clamped at zero.
///
/// `years` is the expectancy minus the current age; `days` is the day
/// component of the calendar period from today to the horizon date.
pub fn time_remaining(birthdate: &Birthdate, gender: Gender, today: NaiveDate) -> TimeRemaining {
    let expectancy = gender.life_expectancy_years();
    let age = age_in_years(birthdate, today);

    if age >= expectancy {
        return TimeRemaining::ZERO;
    }

    let period = Period::between(today, horizon_date(birthdate, gender));

    TimeRemaining {
        years: expectancy - age,
        days: period.days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn birthdate(y: i32, m: u32, d: u32, today: NaiveDate) -> Birthdate {
        Birthdate::new(date(y, m, d), today).unwrap()
    }

    #[test]
    fn test_age_before_anniversary() {
        let today = date(2024, 6, 14);
        assert_eq!(age_in_years(&birthdate(1990, 6, 15, today), today), 33);
    }

    #[test]
    fn test_age_on_anniversary() {
        let today = date(2024, 6, 15);
        assert_eq!(age_in_years(&birthdate(1990, 6, 15, today), today), 34);
    }

    #[test]
    fn test_age_newborn() {
        let today = date(2026, 10, 16);
        assert_eq!(age_in_years(&Birthdate::new(today, today).unwrap(), today), 0);
    }

    #[test]
    fn test_leap_day_age_turns_on_march_first() {
        let feb_28 = date(2001, 2, 28);
        let mar_1 = date(2001, 3, 1);
        assert_eq!(age_in_years(&birthdate(2000, 2, 29, feb_28), feb_28), 0);
        assert_eq!(age_in_years(&birthdate(2000, 2, 29, mar_1), mar_1), 1);

        let leap = date(2004, 2, 29);
        assert_eq!(age_in_years(&birthdate(2000, 2, 29, leap), leap), 4);
    }

    #[test]
    fn test_anniversary() {
        assert_eq!(anniversary(date(1990, 6, 15), 85), Some(date(2075, 6, 15)));
        assert_eq!(anniversary(date(2000, 2, 29), 4), Some(date(2004, 2, 29)));
        assert_eq!(anniversary(date(2000, 2, 29), 1), Some(date(2001, 3, 1)));
        assert_eq!(anniversary(date(2000, 2, 29), 0), Some(date(2000, 2, 29)));
    }

    #[test]
    fn test_horizon_date_per_gender() {
        let today = date(2026, 10, 16);
        let b = birthdate(1990, 6, 15, today);
        assert_eq!(horizon_date(&b, Gender::Male), date(2075, 6, 15));
        assert_eq!(horizon_date(&b, Gender::Female), date(2080, 6, 15));
        assert_eq!(horizon_date(&b, Gender::Other), date(2077, 6, 15));
    }

    #[test]
    fn test_time_remaining_newborn() {
        let today = date(2026, 10, 16);
        let b = Birthdate::new(today, today).unwrap();
        assert_eq!(
            time_remaining(&b, Gender::Female, today),
            TimeRemaining { years: 90, days: 0 }
        );
        assert_eq!(
            time_remaining(&b, Gender::Male, today),
            TimeRemaining { years: 85, days: 0 }
        );
    }

    #[test]
    fn test_time_remaining_days_component() {
        // 30 years and 100 days old
        let today = date(2026, 10, 16);
        let b = birthdate(1996, 7, 8, today);
        assert_eq!(age_in_years(&b, today), 30);
        assert_eq!(
            time_remaining(&b, Gender::Male, today),
            TimeRemaining { years: 55, days: 22 }
        );
    }

    #[test]
    fn test_time_remaining_exact_boundary() {
        let today = date(2026, 10, 16);
        let b = birthdate(1941, 10, 16, today);
        assert_eq!(age_in_years(&b, today), 85);
        assert!(time_remaining(&b, Gender::Male, today).is_exhausted());
    }

    #[test]
    fn test_time_remaining_just_past_boundary() {
        let today = date(2026, 10, 26);
        let b = birthdate(1941, 10, 16, today);
        assert_eq!(time_remaining(&b, Gender::Male, today), TimeRemaining::ZERO);
    }

    #[test]
    fn test_time_remaining_day_before_boundary() {
        let today = date(2026, 10, 15);
        let b = birthdate(1941, 10, 16, today);
        assert_eq!(
            time_remaining(&b, Gender::Male, today),
            TimeRemaining { years: 1, days: 1 }
        );
    }

    #[test]
    fn test_time_remaining_exceeded() {
        let today = date(2026, 10, 16);
        let b = birthdate(1931, 10, 16, today);
        assert_eq!(age_in_years(&b, today), 95);
        for gender in Gender::ALL {
            assert_eq!(time_remaining(&b, gender, today), TimeRemaining::ZERO);
        }
    }

    #[test]
    fn test_leap_day_birthdate() {
        let today = date(2026, 10, 16);
        let b = birthdate(2000, 2, 29, today);
        let remaining = time_remaining(&b, Gender::Female, today);
        assert_eq!(remaining.years, 90 - (2026 - 2000));
        assert_eq!(remaining.days, 13);
        assert_eq!(horizon_date(&b, Gender::Female), date(2090, 3, 1));
    }

    #[test]
    fn test_leap_day_horizon_in_common_year() {
        // 1940-02-29 + 85 years lands on 2025-03-01
        let feb_28 = date(2025, 2, 28);
        let mar_1 = date(2025, 3, 1);
        let b = birthdate(1940, 2, 29, feb_28);

        assert_eq!(
            time_remaining(&b, Gender::Male, feb_28),
            TimeRemaining { years: 1, days: 1 }
        );
        assert_eq!(time_remaining(&b, Gender::Male, mar_1), TimeRemaining::ZERO);
    }

    #[test]
    fn test_leap_day_newborn() {
        let today = date(2024, 2, 29);
        let b = Birthdate::new(today, today).unwrap();
        // horizon 2109-03-01; Feb 29 + 1020 months clamps to Feb 28
        assert_eq!(
            time_remaining(&b, Gender::Male, today),
            TimeRemaining { years: 85, days: 1 }
        );
        // 2114 is not a leap year either
        assert_eq!(
            time_remaining(&b, Gender::Female, today),
            TimeRemaining { years: 90, days: 1 }
        );
    }
}
