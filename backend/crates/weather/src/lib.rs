//! Weather (Mock Forecast) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Condition and temperature tables, forecast entities
//! - `application/` - Use cases
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! All data is generated deterministically from the current date: the
//! condition follows the day of week, the temperature follows the month.

pub mod application;
pub mod domain;
pub mod presentation;

// Re-exports for convenience
pub use domain::entities::{CurrentWeather, DailyForecast, WeatherReport};
pub use domain::value_objects::WeatherCondition;
pub use presentation::openapi::WeatherApiDoc;
pub use presentation::router::weather_router;

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
