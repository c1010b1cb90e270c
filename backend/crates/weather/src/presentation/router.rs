//! Weather Router

use crate::presentation::handlers::{self, WeatherAppState};
use axum::{Router, routing::get};
use kernel::clock::Clock;
use std::sync::Arc;

/// Create the weather router. Mount it under `/api`.
pub fn weather_router<C>(clock: C) -> Router
where
    C: Clock,
{
    let state = WeatherAppState {
        clock: Arc::new(clock),
    };

    Router::new()
        .route("/weather", get(handlers::get_weather::<C>))
        .with_state(state)
}
