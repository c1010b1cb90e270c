//! HTTP Handlers

use crate::application::get_weather::GetWeatherUseCase;
use crate::presentation::dto::WeatherResponse;
use axum::Json;
use axum::extract::State;
use kernel::clock::Clock;
use std::sync::Arc;

/// Shared state for weather handlers
pub struct WeatherAppState<C>
where
    C: Clock,
{
    pub clock: Arc<C>,
}

impl<C> Clone for WeatherAppState<C>
where
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            clock: self.clock.clone(),
        }
    }
}

/// Get current weather and forecast
///
/// Mock data derived from today's date: the condition follows the day of
/// week, the temperature follows the month.
#[utoipa::path(
    get,
    path = "/weather",
    tag = "weather",
    responses(
        (status = 200, description = "Current weather and five-day forecast", body = WeatherResponse)
    )
)]
pub async fn get_weather<C>(State(state): State<WeatherAppState<C>>) -> Json<WeatherResponse>
where
    C: Clock,
{
    let use_case = GetWeatherUseCase::new(state.clock.clone());
    Json(use_case.execute().into())
}
