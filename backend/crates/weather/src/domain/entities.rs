//! Domain Entities

use chrono::NaiveDate;

use crate::domain::value_objects::WeatherCondition;

/// Current conditions. Temperatures are in °C.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentWeather {
    pub temperature: i32,
    pub condition: WeatherCondition,
}

/// Forecast for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub temperature_high: i32,
    pub temperature_low: i32,
    pub condition: WeatherCondition,
}

/// Current conditions plus the forecast for the following days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub current: CurrentWeather,
    pub forecast: Vec<DailyForecast>,
}
