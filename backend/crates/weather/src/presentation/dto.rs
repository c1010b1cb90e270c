//! API DTOs (Data Transfer Objects)

use crate::domain::entities::{CurrentWeather, DailyForecast, WeatherReport};
use crate::domain::value_objects::WeatherCondition;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response for GET /api/weather
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeatherResponse {
    pub current: CurrentWeatherResponse,
    pub forecast: Vec<DailyForecastResponse>,
}

/// Conditions for today
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrentWeatherResponse {
    pub temperature: i32,
    pub condition: WeatherCondition,
    pub description: String,
}

/// Forecast for one upcoming day
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecastResponse {
    /// ISO-8601 date (YYYY-MM-DD)
    pub date: NaiveDate,
    pub temperature_high: i32,
    pub temperature_low: i32,
    pub condition: WeatherCondition,
    pub description: String,
}

impl From<CurrentWeather> for CurrentWeatherResponse {
    fn from(current: CurrentWeather) -> Self {
        Self {
            temperature: current.temperature,
            condition: current.condition,
            description: current.condition.display_text().to_string(),
        }
    }
}

impl From<DailyForecast> for DailyForecastResponse {
    fn from(day: DailyForecast) -> Self {
        Self {
            date: day.date,
            temperature_high: day.temperature_high,
            temperature_low: day.temperature_low,
            condition: day.condition,
            description: day.condition.display_text().to_string(),
        }
    }
}

impl From<WeatherReport> for WeatherResponse {
    fn from(report: WeatherReport) -> Self {
        Self {
            current: report.current.into(),
            forecast: report.forecast.into_iter().map(Into::into).collect(),
        }
    }
}
