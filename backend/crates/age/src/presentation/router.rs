//! Age Router

use crate::presentation::handlers::{self, AgeAppState};
use axum::{Router, routing::get};
use kernel::clock::Clock;
use std::sync::Arc;

/// Create the age router. Mount it under `/api`.
pub fn age_router<C>(clock: C) -> Router
where
    C: Clock,
{
    let state = AgeAppState {
        clock: Arc::new(clock),
    };

    Router::new()
        .route("/age", get(handlers::calculate_age::<C>))
        .with_state(state)
}
