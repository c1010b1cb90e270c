//! Calculate Age Use Case

use crate::domain::entities::AgeData;
use crate::domain::services::{age_in_years, time_remaining};
use crate::domain::value_objects::{Birthdate, Gender};
use crate::error::AgeResult;
use chrono::NaiveDate;
use kernel::clock::Clock;
use std::sync::Arc;

/// Input DTO for calculate age
#[derive(Debug, Clone, Copy)]
pub struct CalculateAgeInput {
    pub birthdate: NaiveDate,
    pub gender: Gender,
}

/// Calculate Age Use Case
pub struct CalculateAgeUseCase<C>
where
    C: Clock,
{
    clock: Arc<C>,
}

impl<C> CalculateAgeUseCase<C>
where
    C: Clock,
{
    pub fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    /// Age as of today.
    pub fn age(&self, birthdate: NaiveDate) -> AgeResult<u32> {
        let today = self.clock.today();
        let birthdate = Birthdate::new(birthdate, today)?;
        Ok(age_in_years(&birthdate, today))
    }

    /// Age plus time remaining until the gender's horizon.
    pub fn execute(&self, input: CalculateAgeInput) -> AgeResult<AgeData> {
        let today = self.clock.today();
        let birthdate = Birthdate::new(input.birthdate, today)?;

        let age = age_in_years(&birthdate, today);
        let time_remaining = time_remaining(&birthdate, input.gender, today);

        tracing::info!(
            gender = %input.gender,
            age,
            years_remaining = time_remaining.years,
            days_remaining = time_remaining.days,
            exhausted = time_remaining.is_exhausted(),
            "Calculated age"
        );

        Ok(AgeData {
            age,
            time_remaining,
        })
    }
}
