//! OpenAPI description of the weather endpoint

use crate::domain::value_objects::WeatherCondition;
use crate::presentation::dto::{CurrentWeatherResponse, DailyForecastResponse, WeatherResponse};
use crate::presentation::handlers;
use utoipa::OpenApi;

/// Paths are relative to the `/api` mount point.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::get_weather),
    components(schemas(
        WeatherResponse,
        CurrentWeatherResponse,
        DailyForecastResponse,
        WeatherCondition
    )),
    tags((name = "weather", description = "Mock current weather and forecast"))
)]
pub struct WeatherApiDoc;
