//! API DTOs (Data Transfer Objects)

use crate::domain::entities::{AgeData, TimeRemaining};
use crate::domain::value_objects::Gender;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query for GET /api/age
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AgeQuery {
    /// Date of birth in ISO format (YYYY-MM-DD)
    pub birthdate: NaiveDate,
    /// Gender identity (MALE, FEMALE, OTHER)
    pub gender: Gender,
}

/// Response for GET /api/age
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgeResponse {
    /// Completed years since the birthdate
    pub age: u32,
    pub time_remaining: TimeRemainingResponse,
}

/// Estimated time left until the life-expectancy horizon
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct TimeRemainingResponse {
    pub years: u32,
    pub days: u32,
}

impl From<TimeRemaining> for TimeRemainingResponse {
    fn from(t: TimeRemaining) -> Self {
        Self {
            years: t.years,
            days: t.days,
        }
    }
}

impl From<AgeData> for AgeResponse {
    fn from(data: AgeData) -> Self {
        Self {
            age: data.age,
            time_remaining: data.time_remaining.into(),
        }
    }
}
