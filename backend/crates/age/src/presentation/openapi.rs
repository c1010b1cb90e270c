//! OpenAPI description of the age endpoint

use crate::domain::value_objects::Gender;
use crate::presentation::dto::{AgeResponse, TimeRemainingResponse};
use crate::presentation::handlers;
use kernel::error::body::ErrorBody;
use utoipa::OpenApi;

/// Paths are relative to the `/api` mount point.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::calculate_age),
    components(schemas(AgeResponse, TimeRemainingResponse, Gender, ErrorBody)),
    tags((name = "age", description = "Age and life-expectancy estimate"))
)]
pub struct AgeApiDoc;
