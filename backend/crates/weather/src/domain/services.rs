//! Domain Services
//!
//! Constant lookup tables behind the mock weather. Northern hemisphere
//! seasons; conditions rotate with the day of week so the demo shows
//! variety while staying predictable.

use chrono::{Datelike, Days, Month, NaiveDate, Weekday};

use crate::domain::entities::{CurrentWeather, DailyForecast};
use crate::domain::value_objects::WeatherCondition;

/// Number of days covered by the forecast.
pub const FORECAST_DAYS: u32 = 5;

/// Spread between the base temperature and the daily high/low.
const HIGH_LOW_SPREAD: i32 = 4;

pub const fn condition_for_weekday(weekday: Weekday) -> WeatherCondition {
    use WeatherCondition::*;
    match weekday {
        Weekday::Mon => Sunny,
        Weekday::Tue => PartlyCloudy,
        Weekday::Wed => Cloudy,
        Weekday::Thu => Rainy,
        Weekday::Fri => PartlyCloudy,
        Weekday::Sat => Sunny,
        Weekday::Sun => Sunny,
    }
}

/// Base temperature in °C for the month.
pub const fn base_temperature_for_month(month: Month) -> i32 {
    match month {
        Month::January => 2,
        Month::February => 4,
        Month::March => 8,
        Month::April => 12,
        Month::May => 17,
        Month::June => 21,
        Month::July => 24,
        Month::August => 23,
        Month::September => 19,
        Month::October => 13,
        Month::November => 7,
        Month::December => 3,
    }
}

/// -1, 0 or +1 depending on how far ahead the forecast day is.
pub const fn forecast_variance(days_ahead: u32) -> i32 {
    (days_ahead % 3) as i32 - 1
}

fn base_temperature(date: NaiveDate) -> i32 {
    // chrono months are always 1..=12
    Month::try_from(date.month() as u8)
        .map(base_temperature_for_month)
        .unwrap_or_default()
}

pub fn current_weather(today: NaiveDate) -> CurrentWeather {
    CurrentWeather {
        temperature: base_temperature(today),
        condition: condition_for_weekday(today.weekday()),
    }
}

/// Forecast for the `FORECAST_DAYS` days after `today`, nearest first.
///
/// Always `FORECAST_DAYS` entries; dates saturate at `NaiveDate::MAX`.
pub fn forecast(today: NaiveDate) -> Vec<DailyForecast> {
    (1..=FORECAST_DAYS)
        .map(|days_ahead| {
            let date = today
                .checked_add_days(Days::new(days_ahead.into()))
                .unwrap_or(NaiveDate::MAX);
            let base = base_temperature(date);
            let variance = forecast_variance(days_ahead);
            DailyForecast {
                date,
                temperature_high: base + HIGH_LOW_SPREAD + variance,
                temperature_low: base - HIGH_LOW_SPREAD + variance,
                condition: condition_for_weekday(date.weekday()),
            }
        })
        .collect()
}
