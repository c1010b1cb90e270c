//! Domain Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Weather condition for current weather and forecasts.
///
/// Serialized by name (`"PARTLY_CLOUDY"`); [`display_text`](Self::display_text)
/// is the human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 6] = [
        WeatherCondition::Sunny,
        WeatherCondition::PartlyCloudy,
        WeatherCondition::Cloudy,
        WeatherCondition::Rainy,
        WeatherCondition::Stormy,
        WeatherCondition::Snowy,
    ];

    #[inline]
    pub const fn code(&self) -> &'static str {
        use WeatherCondition::*;
        match self {
            Sunny => "SUNNY",
            PartlyCloudy => "PARTLY_CLOUDY",
            Cloudy => "CLOUDY",
            Rainy => "RAINY",
            Stormy => "STORMY",
            Snowy => "SNOWY",
        }
    }

    #[inline]
    pub const fn display_text(&self) -> &'static str {
        use WeatherCondition::*;
        match self {
            Sunny => "Sunny",
            PartlyCloudy => "Partly Cloudy",
            Cloudy => "Cloudy",
            Rainy => "Rainy",
            Stormy => "Stormy",
            Snowy => "Snowy",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}
