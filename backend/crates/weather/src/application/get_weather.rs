//! Get Weather Use Case

use crate::domain::entities::WeatherReport;
use crate::domain::services::{current_weather, forecast};
use kernel::clock::Clock;
use std::sync::Arc;

/// Get Weather Use Case
pub struct GetWeatherUseCase<C>
where
    C: Clock,
{
    clock: Arc<C>,
}

impl<C> GetWeatherUseCase<C>
where
    C: Clock,
{
    pub fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    /// Current conditions and the five-day forecast for today.
    pub fn execute(&self) -> WeatherReport {
        let today = self.clock.today();
        let report = WeatherReport {
            current: current_weather(today),
            forecast: forecast(today),
        };

        tracing::debug!(
            %today,
            temperature = report.current.temperature,
            condition = report.current.condition.code(),
            forecast_days = report.forecast.len(),
            "Generated weather report"
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::WeatherCondition;
    use chrono::NaiveDate;
    use kernel::clock::FixedClock;

    #[test]
    fn test_report_for_winter_monday() {
        // 2027-01-04 is a Monday
        let today = NaiveDate::from_ymd_opt(2027, 1, 4).unwrap();
        let use_case = GetWeatherUseCase::new(Arc::new(FixedClock::new(today)));

        let report = use_case.execute();
        assert_eq!(report.current.temperature, 2);
        assert_eq!(report.current.condition, WeatherCondition::Sunny);
        assert_eq!(report.forecast.len(), 5);
        assert!(report.forecast.iter().all(|day| day.date > today));
        assert!(
            report
                .forecast
                .iter()
                .all(|day| day.temperature_high - day.temperature_low == 8)
        );
    }

    #[test]
    fn test_report_is_deterministic() {
        let today = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        let use_case = GetWeatherUseCase::new(Arc::new(FixedClock::new(today)));
        assert_eq!(use_case.execute(), use_case.execute());
    }
}
