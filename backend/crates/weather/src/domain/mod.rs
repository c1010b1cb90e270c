//! Domain Layer - Mock weather model
//!
//! This layer contains:
//! - Domain entities (CurrentWeather, DailyForecast, WeatherReport)
//! - Domain value objects (WeatherCondition)
//! - Domain services (lookup tables and forecast variance)

pub mod entities;
pub mod services;
pub mod value_objects;
