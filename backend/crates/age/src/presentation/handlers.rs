//! HTTP Handlers

use crate::application::calculate_age::{CalculateAgeInput, CalculateAgeUseCase};
use crate::error::AgeResult;
use crate::presentation::dto::{AgeQuery, AgeResponse};
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use kernel::clock::Clock;
use kernel::error::body::ErrorBody;
use std::sync::Arc;

/// Shared state for age handlers
pub struct AgeAppState<C>
where
    C: Clock,
{
    pub clock: Arc<C>,
}

impl<C> Clone for AgeAppState<C>
where
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            clock: self.clock.clone(),
        }
    }
}

/// Calculate age and estimated time remaining
///
/// Current age plus the years/days left until the gender-specific
/// life-expectancy horizon.
#[utoipa::path(
    get,
    path = "/age",
    tag = "age",
    params(AgeQuery),
    responses(
        (status = 200, description = "Age and time remaining", body = AgeResponse),
        (status = 400, description = "Future birthdate, or missing/invalid query parameter", body = ErrorBody)
    )
)]
pub async fn calculate_age<C>(
    State(state): State<AgeAppState<C>>,
    query: Result<Query<AgeQuery>, QueryRejection>,
) -> AgeResult<Json<AgeResponse>>
where
    C: Clock,
{
    let Query(query) = query?;

    let use_case = CalculateAgeUseCase::new(state.clock.clone());

    let output = use_case.execute(CalculateAgeInput {
        birthdate: query.birthdate,
        gender: query.gender,
    })?;

    Ok(Json(output.into()))
}
